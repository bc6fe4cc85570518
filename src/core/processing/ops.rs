use ndarray::{Array3, ArrayBase, ArrayView3, ArrayViewMut3, Data, Ix3, Zip};

/// Shape of a 3-D array as a fixed-size array.
pub fn dim3<S: Data>(a: &ArrayBase<S, Ix3>) -> [usize; 3] {
    let (d0, d1, d2) = a.dim();
    [d0, d1, d2]
}

/// Element-wise copy: dst = src, split across the rayon pool
pub fn par_copy_into(dst: ArrayViewMut3<'_, f32>, src: ArrayView3<'_, f32>) {
    Zip::from(dst).and(src).par_for_each(|d, &s| *d = s);
}

/// Fresh, standard-layout copy of a (possibly strided) view
pub fn par_to_owned(src: ArrayView3<'_, f32>) -> Array3<f32> {
    let mut out = Array3::<f32>::zeros(src.raw_dim());
    par_copy_into(out.view_mut(), src);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::s;

    #[test]
    fn par_to_owned_copies_strided_views() {
        let a = Array3::from_shape_fn((3, 4, 5), |(i, j, k)| (i * 100 + j * 10 + k) as f32);
        let view = a.slice(s![..;2, 1..3, ..;-1]);
        let owned = par_to_owned(view);
        assert_eq!(owned, view);
        assert!(owned.is_standard_layout());
        assert_eq!(dim3(&owned), [2, 2, 5]);
    }
}
