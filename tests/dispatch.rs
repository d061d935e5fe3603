//! End-to-end behavior shared by the fixed and dynamic array types.

use lanewise::{
    gather, scatter, scatter_add, select, Array, Array4f, ArrayError, ArrayRef, DynArray,
    Elementwise, Horizontal, Value,
};

// ── Fixed and dynamic agree ─────────────────────────────────────────

#[test]
fn fixed_and_dynamic_agree() {
    let fa = Array4f::new([1.0, -2.0, 3.5, 0.25]);
    let fb = Array4f::new([0.5, 4.0, -1.0, 2.0]);
    let da: DynArray<f32> = fa.into();
    let db: DynArray<f32> = fb.into();

    assert_eq!((fa * fb).as_slice(), (&da * &db).as_slice());
    assert_eq!(fa.fmadd(&fb, &fa).unwrap().as_slice(), da.fmadd(&db, &da).unwrap().as_slice());
    assert_eq!(fa.hsum(), da.hsum());
    assert_eq!(fa.dot(&fb), da.dot(&db));
    assert_eq!(
        fa.cmp_lt(&fb).unwrap().as_slice(),
        da.cmp_lt(&db).unwrap().as_slice()
    );
}

#[test]
fn errors_agree() {
    let fm = Array::new([true, false]);
    let dm = DynArray::from_slice(&[true, false]);
    assert_eq!(fm.hsum().unwrap_err(), dm.hsum().unwrap_err());
    assert_eq!(fm.sqrt().unwrap_err(), dm.sqrt().unwrap_err());
    assert_eq!(
        fm.sqrt().unwrap_err().to_string(),
        "sqrt(): invalid operand type"
    );
}

// ── Nesting ─────────────────────────────────────────────────────────

#[test]
fn nested_fixed_in_dynamic() {
    // Three 3-vectors of four-lane packets.
    let p: DynArray<Array4f> = DynArray::from_fn(3, |i| Array4f::fill(i as f32 + 1.0));
    assert_eq!(<DynArray<Array4f> as Value>::DEPTH, 2);
    let doubled = &p + &p;
    assert_eq!(*doubled.entry_nd(&[2, 3]), 6.0);
    let len2 = p.dot(&p).unwrap();
    assert_eq!(len2, Array4f::fill(1.0 + 4.0 + 9.0));
}

#[test]
fn nested_select_and_extract() {
    let a = Array::new([Array::new([1, 2]), Array::new([3, 4])]);
    let b = Array::new([Array::new([10, 20]), Array::new([30, 40])]);
    let m = a.cmp_gt(&Array::new([Array::new([1, 1]), Array::new([4, 3])])).unwrap();
    assert_eq!(
        select(&m, &a, &b).unwrap(),
        Array::new([Array::new([10, 2]), Array::new([30, 4])])
    );
    assert_eq!(b.extract(&Array::new([false, true])), Array::new([30, 40]));
    assert_eq!(b.extract(&Array::new([false, false])), Array::new([0, 0]));
}

// ── Memory access ───────────────────────────────────────────────────

#[test]
fn gather_then_scatter_round_trip() {
    let source: Vec<f64> = (0..8).map(|i| i as f64 * 1.5).collect();
    let index = DynArray::from_slice(&[7_u32, 0, 3, 5]);
    let all = DynArray::from_slice(&[true]);
    let g: DynArray<f64> = gather::<true, _, _, _>(&source[..], &index, &all).unwrap();
    assert_eq!(g.as_slice(), &[10.5, 0.0, 4.5, 7.5]);

    let mut target = vec![0.0; 8];
    scatter::<true, _, _, _>(&mut target[..], &g, &index, &all).unwrap();
    for (i, t) in target.iter().enumerate() {
        let expected = if [7, 0, 3, 5].contains(&i) { source[i] } else { 0.0 };
        assert_eq!(*t, expected);
    }
}

#[test]
fn scatter_add_histogram() {
    let bins = DynArray::from_slice(&[0_u8, 2, 2, 1, 2, 0]);
    let ones = DynArray::from_slice(&[1_u32]);
    let mut hist = [0_u32; 3];
    scatter_add(&mut hist[..], &ones, &bins, &DynArray::from_slice(&[true])).unwrap();
    assert_eq!(hist, [2, 1, 3]);
}

#[test]
fn scatter_add_mismatch_is_reported() {
    let mut target = [0; 4];
    let err = scatter_add(
        &mut target[..],
        &DynArray::from_slice(&[1, 2, 3]),
        &DynArray::from_slice(&[0_u32, 1]),
        &DynArray::from_slice(&[true]),
    )
    .unwrap_err();
    assert!(matches!(err, ArrayError::SizeMismatch { op: "scatter_add", .. }));
    assert_eq!(target, [0; 4]);
}

// ── Masked writes ───────────────────────────────────────────────────

#[test]
fn masked_write_from_comparison() {
    let mut x = DynArray::from_slice(&[-3.0_f64, 1.0, -0.5, 2.0]);
    let negative = x.cmp_lt(&DynArray::from_slice(&[0.0])).unwrap();
    let mut view = x.masked(&negative);
    view *= -1.0;
    assert_eq!(x.as_slice(), &[3.0, 1.0, 0.5, 2.0]);
    assert_eq!(x.size(), 4);
}
