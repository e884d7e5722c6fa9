// Copyright 2026 the Cruller Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The keyed wedge container.

extern crate alloc;

use alloc::vec::Vec;

use core::hash::Hash;

use cruller_core::{Mark, Surface};
use cruller_motion::SpringConfig;
use hashbrown::{HashMap, HashSet};
use kurbo::Point;

use crate::config::DonutConfig;
use crate::layout::AngleSpan;
use crate::wedge::{WedgeInfo, WedgePhase, WedgePiece, WedgeSpec};

#[derive(Clone, Debug)]
struct Entry {
    slot: u64,
    piece: WedgePiece,
}

/// A donut chart: shared configuration plus a keyed set of animated wedges.
///
/// The container owns the [`DonutConfig`] and hands the same reference to
/// every piece operation, so all wedges of one donut see identical values.
/// It also holds the [`Surface`] reference used to convert absolute pointer
/// coordinates into angles around the donut center; pieces read it, never
/// mutate it.
///
/// [`Donut::sync`] reconciles piece identity against the data each render
/// pass: retained keys retarget, new keys mount, vanished keys run their
/// exit transition and are swept once it settles.
#[derive(Clone, Debug)]
pub struct Donut<K> {
    config: DonutConfig,
    surface: Surface,
    springs: SpringConfig,
    id_base: u64,
    next_slot: u64,
    entries: HashMap<K, Entry>,
    order: Vec<K>,
}

impl<K: Clone + Eq + Hash> Donut<K> {
    /// Creates an empty donut.
    ///
    /// Wedges animate with the donut default spring (stiffness 100,
    /// damping 20 — critically damped).
    pub fn new(config: DonutConfig, surface: Surface) -> Self {
        Self {
            config,
            surface,
            springs: SpringConfig::new().with_damping(20.0),
            id_base: 0,
            next_slot: 0,
            entries: HashMap::new(),
            order: Vec::new(),
        }
    }

    /// Sets the base value for generated mark ids.
    pub fn with_id_base(mut self, id_base: u64) -> Self {
        self.id_base = id_base;
        self
    }

    /// Sets the spring used by wedges mounted from now on.
    pub fn with_spring_config(mut self, springs: SpringConfig) -> Self {
        self.springs = springs;
        self
    }

    /// Returns the shared configuration.
    pub fn config(&self) -> &DonutConfig {
        &self.config
    }

    /// Returns the drawing surface.
    pub fn surface(&self) -> Surface {
        self.surface
    }

    /// Sets the enter/exit transition angle for subsequent mounts and exits.
    pub fn set_enter_angle(&mut self, enter_angle: Option<f64>) {
        self.config.enter_angle = enter_angle;
    }

    /// Reconciles the wedge set against `desired`.
    ///
    /// Keys present in both update in place (shortest-path retarget); new
    /// keys mount growing out of the enter angle; keys no longer present
    /// begin their exit transition and stay, after the desired wedges in
    /// their previous relative order, until [`Donut::tick`] sweeps them.
    ///
    /// # Panics
    ///
    /// Panics if `desired` contains the same key twice — that is a wiring
    /// mistake in the calling page, not a data condition.
    pub fn sync(&mut self, desired: &[(K, WedgeSpec)]) {
        let mut seen: HashSet<K> = HashSet::with_capacity(desired.len());
        let mut order: Vec<K> = Vec::with_capacity(desired.len());

        for (key, spec) in desired {
            assert!(
                seen.insert(key.clone()),
                "duplicate wedge key passed to Donut::sync"
            );
            match self.entries.get_mut(key) {
                Some(entry) => entry.piece.update(spec.clone(), &self.config),
                None => {
                    let slot = self.next_slot;
                    self.next_slot += 1;
                    self.entries.insert(
                        key.clone(),
                        Entry {
                            slot,
                            piece: WedgePiece::enter(spec.clone(), &self.config, self.springs),
                        },
                    );
                }
            }
            order.push(key.clone());
        }

        for key in &self.order {
            if seen.contains(key) {
                continue;
            }
            if let Some(entry) = self.entries.get_mut(key) {
                entry.piece.begin_exit(&self.config);
                order.push(key.clone());
            }
        }

        self.order = order;
    }

    /// Advances every wedge by `dt` seconds, sweeps finished exits, and
    /// returns whether anything is still in motion.
    pub fn tick(&mut self, dt: f64) -> bool {
        for entry in self.entries.values_mut() {
            entry.piece.tick(dt);
        }
        let entries = &mut self.entries;
        self.order.retain(|key| {
            let exited = entries.get(key).is_some_and(|e| e.piece.is_exited());
            if exited {
                entries.remove(key);
            }
            !exited
        });
        self.entries.values().any(|e| !e.piece.is_settled())
    }

    /// Derives this frame's marks for all wedges, in display order.
    pub fn marks(&self) -> Vec<Mark> {
        let center = self.surface.center();
        let mut marks = Vec::with_capacity(self.order.len() * 3);
        for key in &self.order {
            if let Some(entry) = self.entries.get(key) {
                let id_base = self.id_base + entry.slot * 4;
                marks.extend(entry.piece.marks(id_base, &self.config, center));
            }
        }
        marks
    }

    /// Returns the interaction payload for a wedge, at invocation time.
    pub fn info(&self, key: &K) -> Option<WedgeInfo> {
        self.entries.get(key).map(|e| e.piece.info())
    }

    /// Returns a wedge piece.
    pub fn piece(&self, key: &K) -> Option<&WedgePiece> {
        self.entries.get(key).map(|e| &e.piece)
    }

    /// Returns a wedge piece mutably (for spring swaps and the like).
    pub fn piece_mut(&mut self, key: &K) -> Option<&mut WedgePiece> {
        self.entries.get_mut(key).map(|e| &mut e.piece)
    }

    /// Hit-tests an angle against the current animated spans, skipping
    /// exiting wedges.
    pub fn wedge_at(&self, angle: f64) -> Option<&K> {
        self.order.iter().find(|key| {
            self.entries.get(*key).is_some_and(|e| {
                if e.piece.phase() == WedgePhase::Exiting {
                    return false;
                }
                let (start, end) = e.piece.current_span();
                AngleSpan::new(start, end).contains(angle)
            })
        })
    }

    /// Converts an absolute pointer position into an angle around the donut
    /// center.
    pub fn pointer_angle(&self, pos: Point) -> f64 {
        self.surface.pointer_angle(pos)
    }

    /// Returns the number of live wedges (exiting ones included).
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns whether the donut has no wedges at all.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::string::String;

    use super::*;

    const FRAME: f64 = 1.0 / 60.0;

    fn settle(donut: &mut Donut<String>) {
        for _ in 0..600 {
            donut.tick(FRAME);
        }
    }

    fn spec(start: f64, end: f64) -> WedgeSpec {
        WedgeSpec::new(start, end)
    }

    fn key(s: &str) -> String {
        String::from(s)
    }

    #[test]
    fn sync_mounts_updates_and_exits() {
        let mut donut = Donut::new(
            DonutConfig::new().with_enter_angle(0.0),
            Surface::new(300.0, 300.0),
        );
        donut.sync(&[(key("a"), spec(0.0, 1.0)), (key("b"), spec(1.0, 2.0))]);
        assert_eq!(donut.len(), 2);
        settle(&mut donut);

        // Drop "a": it exits and is eventually swept.
        donut.sync(&[(key("b"), spec(0.0, 2.0))]);
        assert_eq!(donut.len(), 2);
        assert_eq!(
            donut.piece(&key("a")).expect("still exiting").phase(),
            WedgePhase::Exiting
        );
        settle(&mut donut);
        assert_eq!(donut.len(), 1);
        assert!(donut.piece(&key("a")).is_none());

        let (s, e) = donut.piece(&key("b")).expect("kept").current_span();
        assert_eq!((s, e), (0.0, 2.0));
    }

    #[test]
    fn marks_keep_stable_ids_per_key() {
        let mut donut =
            Donut::new(DonutConfig::new(), Surface::new(300.0, 300.0)).with_id_base(100);
        donut.sync(&[(key("a"), spec(0.0, 1.0)), (key("b"), spec(1.0, 2.0))]);
        settle(&mut donut);
        let ids_before: Vec<u64> = donut.marks().iter().map(|m| m.id.to_raw()).collect();

        // Reordering the data must not change which ids belong to which key.
        donut.sync(&[(key("b"), spec(0.0, 1.0)), (key("a"), spec(1.0, 2.0))]);
        settle(&mut donut);
        let ids_after: Vec<u64> = donut.marks().iter().map(|m| m.id.to_raw()).collect();
        let mut sorted_before = ids_before.clone();
        let mut sorted_after = ids_after.clone();
        sorted_before.sort_unstable();
        sorted_after.sort_unstable();
        assert_eq!(sorted_before, sorted_after);
        assert_ne!(ids_before, ids_after);
    }

    #[test]
    #[should_panic(expected = "duplicate wedge key")]
    fn duplicate_keys_panic() {
        let mut donut = Donut::new(DonutConfig::new(), Surface::new(300.0, 300.0));
        donut.sync(&[(key("a"), spec(0.0, 1.0)), (key("a"), spec(1.0, 2.0))]);
    }

    #[test]
    fn wedge_at_finds_the_settled_span() {
        let mut donut = Donut::new(DonutConfig::new(), Surface::new(300.0, 300.0));
        donut.sync(&[(key("a"), spec(0.0, 1.0)), (key("b"), spec(1.0, 2.0))]);
        settle(&mut donut);
        assert_eq!(donut.wedge_at(0.5), Some(&key("a")));
        assert_eq!(donut.wedge_at(1.5), Some(&key("b")));
        assert_eq!(donut.wedge_at(3.0), None);
    }

    #[test]
    fn exiting_wedges_are_not_hit_tested() {
        let mut donut = Donut::new(
            DonutConfig::new().with_enter_angle(0.0),
            Surface::new(300.0, 300.0),
        );
        donut.sync(&[(key("a"), spec(0.0, 1.0)), (key("b"), spec(1.0, 2.0))]);
        settle(&mut donut);
        donut.sync(&[(key("b"), spec(1.0, 2.0))]);
        // "a" still animates over its old span but no longer receives hits.
        assert_eq!(donut.wedge_at(0.5), None);
    }

    #[test]
    fn tick_reports_motion_until_everything_settles() {
        let mut donut = Donut::new(DonutConfig::new(), Surface::new(300.0, 300.0));
        donut.sync(&[(key("a"), spec(0.0, 1.0))]);
        assert!(donut.tick(FRAME));
        settle(&mut donut);
        assert!(!donut.tick(FRAME));
    }

    #[test]
    fn sync_preserves_exit_order_after_desired_wedges() {
        let mut donut = Donut::new(
            DonutConfig::new().with_enter_angle(0.0),
            Surface::new(300.0, 300.0),
        );
        donut.sync(&[
            (key("a"), spec(0.0, 1.0)),
            (key("b"), spec(1.0, 2.0)),
            (key("c"), spec(2.0, 3.0)),
        ]);
        settle(&mut donut);
        donut.sync(&[(key("b"), spec(0.0, 2.0))]);
        let marks = donut.marks();
        // Desired wedge first, exiting wedges after, three marks each.
        assert_eq!(marks.len(), 9);
        // "b" holds slot 1, so its outline mark leads the frame.
        assert_eq!(marks[0].id.to_raw(), 4);
    }
}
