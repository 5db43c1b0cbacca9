/// [`std::collections::HashSet`] with the FNV hasher, which is faster for the small keys used
/// throughout the crate.
pub(crate) type HashSet<K> = std::collections::HashSet<K, fnv::FnvBuildHasher>;
