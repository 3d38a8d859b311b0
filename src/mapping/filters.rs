//! Mapping filters.
//!
//! A filter takes a mapping and produces a new mapping over the same pair of contexts; the input
//! is left alone.

use rand::Rng;

use crate::{mapping::ContextMapping, misc::log::targets};

/// A random sample of roughly `sample_size` elements of a mapping.
///
/// Each element is kept with probability tuned so the sample lands near the requested size, and
/// never above it; a mapping no larger than `sample_size` is returned whole.
/// The caller supplies the source of randomness.
pub fn random_sample<R: Rng>(
    mapping: &ContextMapping,
    sample_size: usize,
    rng: &mut R,
) -> ContextMapping {
    if sample_size == 0 {
        return mapping.empty_like();
    }
    if mapping.size() <= sample_size {
        return mapping.clone();
    }

    log::info!(
        target: targets::MAPPING,
        "sampling {} of {} elements",
        sample_size,
        mapping.size(),
    );

    let one_in = (mapping.size() / sample_size - mapping.size() / (10 * sample_size)).max(1);

    let mut sample = mapping.empty_like();
    for element in mapping {
        if rng.random_range(0..one_in) == 0 && sample.size() < sample_size {
            sample.set_relation(element.source, element.target, element.relation);
        }
    }
    sample
}
