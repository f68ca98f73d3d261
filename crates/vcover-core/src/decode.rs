//! Turning the output of an external solver into a candidate cover.
//!
//! Eigensolvers hand back a probability per computational basis state;
//! sampling backends hand back shot counts per measured bitstring. In both
//! cases the most likely outcome is read as an assignment where qubit i
//! being `1` puts vertex i in the cover.

use std::collections::BTreeMap;

use tracing::debug;

use crate::cover::Assignment;
use crate::error::{CoverError, CoverResult};

/// Most likely basis state of a probability vector over `n_qubits` qubits.
///
/// Entry k is the probability of basis state k, with qubit i stored in bit i
/// of k. Ties go to the lowest index.
pub fn most_likely_from_probabilities(probs: &[f64], n_qubits: usize) -> CoverResult<Assignment> {
    let expected = u32::try_from(n_qubits)
        .ok()
        .and_then(|shift| 1usize.checked_shl(shift))
        .ok_or_else(|| {
            CoverError::InvalidDistribution(format!("{n_qubits} qubits cannot be indexed"))
        })?;
    if probs.len() != expected {
        return Err(CoverError::InvalidDistribution(format!(
            "expected {expected} probabilities for {n_qubits} qubits, got {}",
            probs.len()
        )));
    }
    if let Some(bad) = probs.iter().find(|p| !p.is_finite() || **p < 0.0) {
        return Err(CoverError::InvalidDistribution(format!(
            "probability {bad} is not a finite non-negative number"
        )));
    }

    let (index, p) = probs
        .iter()
        .copied()
        .enumerate()
        .fold((0, f64::NEG_INFINITY), |best, (i, p)| {
            if p > best.1 { (i, p) } else { best }
        });
    debug!(index, probability = p, "most likely basis state");
    Ok(Assignment::from_index_lsb(index as u64, n_qubits))
}

/// Most frequent bitstring in a shot histogram.
///
/// Bitstrings use the measurement convention where the rightmost character
/// is qubit 0, so the result is reversed into vertex order. Spaces (register
/// separators) are ignored. Ties go to the lexicographically smallest key.
pub fn most_likely_from_counts(counts: &BTreeMap<String, u64>) -> CoverResult<Assignment> {
    let mut best: Option<(&str, u64)> = None;
    for (bits, &count) in counts {
        if best.is_none_or(|(_, c)| count > c) {
            best = Some((bits.as_str(), count));
        }
    }
    let (bits, count) =
        best.ok_or_else(|| CoverError::InvalidDistribution("no measurement outcomes".into()))?;

    let width = bits.chars().filter(|c| *c != ' ').count();
    if let Some((other, _)) = counts
        .iter()
        .find(|(k, _)| k.chars().filter(|c| *c != ' ').count() != width)
    {
        return Err(CoverError::InvalidDistribution(format!(
            "bitstrings '{bits}' and '{other}' differ in width"
        )));
    }

    let vertex_order: String = bits.chars().rev().filter(|c| *c != ' ').collect();
    debug!(bitstring = bits, count, "most frequent outcome");
    Assignment::from_bitstring(&vertex_order)
}
