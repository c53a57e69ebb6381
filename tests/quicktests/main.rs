use quickcheck::{Arbitrary, Gen};

mod tree;

/// What to do to the tree (and the model it's checked against) next.
#[derive(Copy, Clone, Debug)]
pub(crate) enum Op<K> {
    /// Insert the K
    Insert(K),
    /// Remove the K
    Remove(K),
}

impl<K> Arbitrary for Op<K>
where
    K: Arbitrary,
{
    fn arbitrary(g: &mut Gen) -> Self {
        if bool::arbitrary(g) {
            Op::Insert(K::arbitrary(g))
        } else {
            Op::Remove(K::arbitrary(g))
        }
    }
}
