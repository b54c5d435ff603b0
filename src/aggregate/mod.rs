/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Run-wide aggregation of PKA spectra
//!
//! Every collapsed channel of every parent nuclide is folded into two sets
//! of running totals: one per daughter nuclide and one per daughter element.
//! Contributions are weighted by the parent's ratio. Light-particle
//! production channels are filtered with [`is_excluded`] once a total for
//! the daughter exists, so the generic (z,p)/(z,α) level codes are not
//! counted twice against heavy residuals.

mod accumulator;
mod errors;

pub use accumulator::{Accumulator, AccumulatorSummary, DamageTotals};
pub use errors::{AggregateError, Result};

use std::collections::btree_map::Entry;
use std::collections::BTreeMap;

use log::{debug, trace};
use ndarray::Array1;

use crate::damage::ChannelDamage;
use crate::nuclide::{atomic_number_from_symbol, NuclideIdentity, MT_ALPHA_RANGE, MT_PROTON_RANGE};
use crate::recoil::RecoilChannel;
use crate::spectrum::EnergyGroupStructure;

/// Outcome of one contribution against one map
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Merge {
    /// A new accumulator was created
    Created,
    /// Added to an existing accumulator
    Merged,
    /// Dropped by the exclusion rule
    Excluded,
}

/// Outcome of a contribution against both maps
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Contribution {
    pub nuclide: Merge,
    pub element: Merge,
}

/// True if a channel must not be merged into an existing total
///
/// (z,α) level codes 800-849 only count when the daughter is He-4, and
/// (z,p) level codes 600-649 only when it is H-1.
pub fn is_excluded(mtd: i32, daughter: &NuclideIdentity) -> bool {
    (MT_ALPHA_RANGE.contains(&mtd) && *daughter != NuclideIdentity::helium4())
        || (MT_PROTON_RANGE.contains(&mtd) && *daughter != NuclideIdentity::hydrogen1())
}

/// Per-nuclide and per-element totals of one run
#[derive(Debug, Clone)]
pub struct AggregationContext {
    assumed_ed: f64,
    nuclides: BTreeMap<NuclideIdentity, Accumulator>,
    elements: BTreeMap<u32, Accumulator>,
    finalized: bool,
}

impl AggregationContext {
    /// Empty context; `assumed_ed` (eV) is used for the equivalent dpa rates
    pub fn new(assumed_ed: f64) -> Self {
        Self {
            assumed_ed,
            nuclides: BTreeMap::new(),
            elements: BTreeMap::new(),
            finalized: false,
        }
    }

    pub fn assumed_ed(&self) -> f64 {
        self.assumed_ed
    }

    /// Fold a collapsed channel into the totals of its daughter
    ///
    /// # Arguments
    ///
    /// * `channel` - Channel with a PKA spectrum, and damage if computed
    /// * `groups` - Outgoing group structure of the channel
    /// * `ratio` - Weighting ratio of the parent nuclide
    pub fn contribute(
        &mut self,
        channel: &RecoilChannel,
        groups: &EnergyGroupStructure,
        ratio: f64,
    ) -> Result<Contribution> {
        if !ratio.is_finite() {
            return Err(AggregateError::InvalidRatio(ratio));
        }
        let spectrum = channel
            .pka_spectrum()
            .ok_or_else(|| AggregateError::NotCollapsed(channel.to_string()))?;
        let damage = channel.damage();
        let daughter = *channel.daughter();
        let excluded = is_excluded(channel.mtd(), &daughter);

        let nuclide = merge(
            self.nuclides.entry(daughter),
            daughter.name(),
            channel,
            groups,
            spectrum,
            damage,
            ratio,
            excluded,
        )?;
        let element = merge(
            self.elements.entry(daughter.z),
            daughter.element().to_string(),
            channel,
            groups,
            spectrum,
            damage,
            ratio,
            excluded,
        )?;

        if nuclide != Merge::Excluded || element != Merge::Excluded {
            self.finalized = false;
        }
        trace!(
            "{} -> {}: nuclide {:?}, element {:?}",
            channel,
            daughter,
            nuclide,
            element
        );
        Ok(Contribution { nuclide, element })
    }

    /// Compute the averages of every accumulator
    ///
    /// Calling it again without new contributions changes nothing.
    pub fn finalize(&mut self) {
        if self.finalized {
            return;
        }
        for acc in self.nuclides.values_mut().chain(self.elements.values_mut()) {
            acc.finalize(self.assumed_ed);
        }
        debug!(
            "Finalized {} nuclide and {} element totals",
            self.nuclides.len(),
            self.elements.len()
        );
        self.finalized = true;
    }

    pub fn is_finalized(&self) -> bool {
        self.finalized
    }

    /// Totals of a daughter nuclide
    pub fn nuclide(&self, identity: &NuclideIdentity) -> Option<&Accumulator> {
        self.nuclides.get(identity)
    }

    /// Totals of a daughter nuclide by display name, e.g. "Fe-56"
    pub fn nuclide_by_name(&self, name: &str) -> Option<&Accumulator> {
        self.nuclides.values().find(|acc| acc.label() == name)
    }

    /// Totals of an element by symbol, e.g. "Fe"
    pub fn element(&self, symbol: &str) -> Option<&Accumulator> {
        atomic_number_from_symbol(symbol).and_then(|z| self.elements.get(&z))
    }

    /// Nuclide totals ordered by (Z, A)
    pub fn nuclides(&self) -> impl Iterator<Item = (&NuclideIdentity, &Accumulator)> {
        self.nuclides.iter()
    }

    /// Element totals ordered by Z
    pub fn elements(&self) -> impl Iterator<Item = &Accumulator> {
        self.elements.values()
    }

    /// Sum of every element total, or `None` if nothing was contributed
    ///
    /// Elements accumulated on group structures of different lengths cannot
    /// be summed and fail with [`AggregateError::GroupMismatch`].
    pub fn total_pka_spectrum(&self) -> Result<Option<Array1<f64>>> {
        let mut iter = self.elements.values();
        let Some(first) = iter.next() else {
            return Ok(None);
        };
        iter.try_fold(first.pka_spectrum().clone(), |mut sum, acc| {
            if acc.pka_spectrum().len() != sum.len() {
                return Err(AggregateError::GroupMismatch {
                    channel: acc.label().to_string(),
                    target: first.label().to_string(),
                });
            }
            sum += acc.pka_spectrum();
            Ok(sum)
        })
        .map(Some)
    }
}

#[allow(clippy::too_many_arguments)]
fn merge<K: Ord>(
    entry: Entry<'_, K, Accumulator>,
    label: String,
    channel: &RecoilChannel,
    groups: &EnergyGroupStructure,
    spectrum: &Array1<f64>,
    damage: Option<&ChannelDamage>,
    ratio: f64,
    excluded: bool,
) -> Result<Merge> {
    match entry {
        Entry::Vacant(slot) => {
            slot.insert(Accumulator::new(label, groups.clone(), spectrum, damage, ratio));
            Ok(Merge::Created)
        }
        Entry::Occupied(_) if excluded => Ok(Merge::Excluded),
        Entry::Occupied(mut slot) => {
            let acc = slot.get_mut();
            if !acc.groups().same_grid(groups) {
                return Err(AggregateError::GroupMismatch {
                    channel: channel.to_string(),
                    target: acc.label().to_string(),
                });
            }
            acc.add(spectrum, damage, ratio);
            Ok(Merge::Merged)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recoil::RecoilMatrix;
    use approx::assert_relative_eq;
    use ndarray::array;

    fn groups() -> EnergyGroupStructure {
        EnergyGroupStructure::new(vec![0.1, 1.0, 10.0]).unwrap()
    }

    fn collapsed(title: &str, mtd: i32, daughter: (u32, u32), flux: [f64; 2]) -> RecoilChannel {
        let matrix = RecoilMatrix::from_triplets(2, 2, [(0, 0, 1.0), (1, 1, 1.0)]).unwrap();
        let channel = RecoilChannel::new(
            title,
            mtd,
            NuclideIdentity::new(daughter.0, daughter.1).unwrap(),
            matrix,
        );
        channel.collapse(&Array1::from(flux.to_vec())).unwrap();
        channel
    }

    #[test]
    fn test_exclusion_predicate() {
        let fe56 = NuclideIdentity::new(26, 56).unwrap();
        assert!(is_excluded(820, &fe56));
        assert!(!is_excluded(820, &NuclideIdentity::helium4()));
        assert!(is_excluded(600, &fe56));
        assert!(!is_excluded(649, &NuclideIdentity::hydrogen1()));
        assert!(is_excluded(649, &NuclideIdentity::helium4()));
        assert!(!is_excluded(850, &fe56));
        assert!(!is_excluded(2, &fe56));
    }

    #[test]
    fn test_excluded_channel_dropped_from_existing_entry() {
        let grid = groups();
        let mut ctx = AggregationContext::new(40.0);
        ctx.contribute(&collapsed("(n,n) recoil", 2, (26, 56), [1.0, 1.0]), &grid, 1.0)
            .unwrap();

        let outcome = ctx
            .contribute(&collapsed("(n,a) recoil", 820, (26, 56), [5.0, 5.0]), &grid, 1.0)
            .unwrap();
        assert_eq!(outcome.nuclide, Merge::Excluded);
        assert_eq!(outcome.element, Merge::Excluded);
        assert_eq!(ctx.nuclide_by_name("Fe-56").unwrap().pka_spectrum(), &array![1.0, 1.0]);

        let alpha = ctx
            .contribute(&collapsed("(n,a) alpha", 820, (2, 4), [5.0, 5.0]), &grid, 1.0)
            .unwrap();
        assert_eq!(alpha.nuclide, Merge::Created);
        let again = ctx
            .contribute(&collapsed("(n,a) alpha", 820, (2, 4), [1.0, 1.0]), &grid, 1.0)
            .unwrap();
        assert_eq!(again.nuclide, Merge::Merged);
        assert_eq!(ctx.element("He").unwrap().pka_spectrum(), &array![6.0, 6.0]);
    }

    #[test]
    fn test_first_contribution_always_accepted() {
        let grid = groups();
        let mut ctx = AggregationContext::new(40.0);
        let outcome = ctx
            .contribute(&collapsed("(n,p) recoil", 620, (25, 56), [2.0, 3.0]), &grid, 0.5)
            .unwrap();
        assert_eq!(outcome, Contribution { nuclide: Merge::Created, element: Merge::Created });
        assert_eq!(ctx.element("Mn").unwrap().pka_spectrum(), &array![1.0, 1.5]);
    }

    #[test]
    fn test_element_and_nuclide_checked_independently() {
        let grid = groups();
        let mut ctx = AggregationContext::new(40.0);
        ctx.contribute(&collapsed("(n,n) recoil", 2, (24, 52), [1.0, 1.0]), &grid, 1.0)
            .unwrap();
        // Cr-53 is new, but element Cr already exists
        let outcome = ctx
            .contribute(&collapsed("(n,a) recoil", 820, (24, 53), [4.0, 4.0]), &grid, 1.0)
            .unwrap();
        assert_eq!(outcome.nuclide, Merge::Created);
        assert_eq!(outcome.element, Merge::Excluded);
        assert_eq!(ctx.element("Cr").unwrap().pka_spectrum(), &array![1.0, 1.0]);
    }

    #[test]
    fn test_order_independent_without_exclusions() {
        let grid = groups();
        let channels = [
            collapsed("(n,n) recoil", 2, (26, 56), [1.0, 2.0]),
            collapsed("(n,2n) recoil", 16, (26, 55), [0.5, 0.25]),
            collapsed("(n,g) recoil", 102, (26, 57), [3.0, 0.0]),
        ];
        let ratios = [0.9, 0.3, 0.7];

        let mut forward = AggregationContext::new(40.0);
        for (c, r) in channels.iter().zip(ratios) {
            forward.contribute(c, &grid, r).unwrap();
        }
        let mut backward = AggregationContext::new(40.0);
        for (c, r) in channels.iter().zip(ratios).rev() {
            backward.contribute(c, &grid, r).unwrap();
        }

        let a = forward.element("Fe").unwrap().pka_spectrum();
        let b = backward.element("Fe").unwrap().pka_spectrum();
        for (x, y) in a.iter().zip(b.iter()) {
            assert_relative_eq!(*x, *y, max_relative = 1e-12);
        }
        assert_eq!(forward.nuclides().count(), 3);
    }

    #[test]
    fn test_uncollapsed_channel_rejected() {
        let matrix = RecoilMatrix::zeros(2, 2);
        let channel = RecoilChannel::new("(n,n) recoil", 2, NuclideIdentity::new(26, 56).unwrap(), matrix);
        let mut ctx = AggregationContext::new(40.0);
        assert!(matches!(
            ctx.contribute(&channel, &groups(), 1.0),
            Err(AggregateError::NotCollapsed(_))
        ));
    }

    #[test]
    fn test_grid_mismatch_rejected() {
        let mut ctx = AggregationContext::new(40.0);
        ctx.contribute(&collapsed("(n,n) recoil", 2, (26, 56), [1.0, 1.0]), &groups(), 1.0)
            .unwrap();
        let other = EnergyGroupStructure::new(vec![0.1, 2.0, 10.0]).unwrap();
        assert!(matches!(
            ctx.contribute(&collapsed("(n,n) recoil", 2, (26, 56), [1.0, 1.0]), &other, 1.0),
            Err(AggregateError::GroupMismatch { .. })
        ));
    }

    #[test]
    fn test_finalize_and_total() {
        let grid = groups();
        let mut ctx = AggregationContext::new(40.0);
        ctx.contribute(&collapsed("(n,n) recoil", 2, (26, 56), [1.0, 0.0]), &grid, 1.0)
            .unwrap();
        ctx.contribute(&collapsed("(n,a) alpha", 107, (2, 4), [0.0, 1.0]), &grid, 1.0)
            .unwrap();
        assert!(!ctx.is_finalized());
        ctx.finalize();
        assert!(ctx.is_finalized());

        let fe = ctx.element("Fe").unwrap().summary().unwrap();
        assert_relative_eq!(fe.average_pka_energy_ev, 0.55e6, max_relative = 1e-12);
        assert_eq!(ctx.total_pka_spectrum().unwrap().unwrap(), array![1.0, 1.0]);

        let names: Vec<&str> = ctx.elements().map(|a| a.label()).collect();
        assert_eq!(names, ["He", "Fe"]);
    }

    #[test]
    fn test_total_of_mismatched_elements_rejected() {
        let mut ctx = AggregationContext::new(40.0);
        assert_eq!(ctx.total_pka_spectrum().unwrap(), None);
        ctx.contribute(&collapsed("(n,n) recoil", 2, (26, 56), [1.0, 1.0]), &groups(), 1.0)
            .unwrap();

        let fine = EnergyGroupStructure::new(vec![0.1, 1.0, 5.0, 10.0]).unwrap();
        let matrix = RecoilMatrix::from_triplets(3, 3, [(0, 0, 1.0)]).unwrap();
        let alpha = RecoilChannel::new("(n,a) alpha", 107, NuclideIdentity::helium4(), matrix);
        alpha.collapse(&array![1.0, 1.0, 1.0]).unwrap();
        ctx.contribute(&alpha, &fine, 1.0).unwrap();

        assert!(matches!(
            ctx.total_pka_spectrum(),
            Err(AggregateError::GroupMismatch { .. })
        ));
    }
}
