//! Switch orchestration
//!
//! One [`TabController`] instance serves one [`TabList`]; separate windows
//! get separate controllers and never share history or switch memory. All
//! operations run synchronously on the caller's event loop and complete
//! before the next trigger is processed.

use super::error::SwitchError;
use super::history::SelectionHistory;
use super::refresh::RefreshDebouncer;
use super::removal;
use crate::address::{self, ResolveError};
use crate::config::NavConfig;
use crate::matching::{self, MatchQuery, Pattern, Scope};
use crate::notify::{Notify, StderrNotify};
use crate::tabs::{TabId, TabList};
use std::collections::{HashMap, HashSet};
use std::sync::Arc;

/// Remembered arguments of the last explicit filter switch
///
/// Consumed by repeat invocations, which pass no filter of their own.
#[derive(Debug, Clone, Default)]
struct SwitchMemory {
    last_filter: String,
    last_tolerant: bool,
}

/// Per-list selection controller
///
/// Owns the selection history, the repeat memory, the ordinal side-table
/// and the refresh debouncer for a single tab list.
pub struct TabController {
    config: NavConfig,
    history: SelectionHistory,
    memory: SwitchMemory,
    ordinals: HashMap<TabId, usize>,
    refresh: RefreshDebouncer,
    removing: HashSet<TabId>,
    notify: Arc<dyn Notify>,
}

impl TabController {
    /// Create a controller with the given configuration
    #[must_use]
    pub fn new(config: NavConfig) -> Self {
        let refresh = RefreshDebouncer::new(config.refresh_window());
        let memory = SwitchMemory {
            last_filter: String::new(),
            last_tolerant: config.tolerant,
        };
        Self {
            config,
            history: SelectionHistory::new(),
            memory,
            ordinals: HashMap::new(),
            refresh,
            removing: HashSet::new(),
            notify: Arc::new(StderrNotify::new()),
        }
    }

    /// Replace the notification sink
    #[must_use]
    pub fn with_notify(mut self, notify: Arc<dyn Notify>) -> Self {
        self.notify = notify;
        self
    }

    /// The selection history
    #[must_use]
    pub const fn history(&self) -> &SelectionHistory {
        &self.history
    }

    /// The alternate tab, if one is set and still present
    #[must_use]
    pub fn alternate(&self, list: &TabList) -> Option<TabId> {
        self.history.alternate(list)
    }

    /// Explicitly overwrite the selection history pair
    pub fn record_history(&mut self, current: Option<TabId>, alternate: Option<TabId>) {
        self.history.record(current, alternate);
    }

    // ------------------------------------------------------------------
    // Selection
    // ------------------------------------------------------------------

    /// Select the tab at the position described by `spec`
    ///
    /// An unresolved spec rings the alert through the notify sink instead
    /// of returning an error; nothing else changes.
    pub fn select(&mut self, list: &mut TabList, spec: &str, wrap: bool) {
        match address::resolve_spec(list, spec, wrap, 0) {
            Ok(index) => {
                if let Some(id) = list.all().get(index).map(|t| t.id) {
                    self.commit(list, id);
                }
            }
            Err(_) => self.notify.alert(),
        }
    }

    /// Select a concrete tab, recording history and scheduling a refresh
    pub fn select_tab(&mut self, list: &mut TabList, id: TabId) {
        if !self.commit(list, id) {
            self.notify.alert();
        }
    }

    /// Select the next tab, `count` positions forward
    pub fn select_next(&mut self, list: &mut TabList, count: usize) {
        let wrap = self.config.wrap;
        self.select(list, &format!("+{}", count.max(1)), wrap);
    }

    /// Select the previous tab, `count` positions back
    pub fn select_prev(&mut self, list: &mut TabList, count: usize) {
        let wrap = self.config.wrap;
        self.select(list, &format!("-{}", count.max(1)), wrap);
    }

    /// Select the first tab
    pub fn select_first(&mut self, list: &mut TabList) {
        self.select(list, "0", false);
    }

    /// Select the last tab
    pub fn select_last(&mut self, list: &mut TabList) {
        self.select(list, "$", false);
    }

    /// Toggle to the alternate tab
    ///
    /// # Errors
    ///
    /// [`SwitchError::NoAlternate`] when no alternate is set, it has left
    /// the list, or it equals the current tab.
    pub fn select_alternate(&mut self, list: &mut TabList) -> Result<(), SwitchError> {
        match self.history.alternate(list) {
            Some(alt) if list.selected() != Some(alt) => {
                self.commit(list, alt);
                Ok(())
            }
            _ => Err(self.reported(SwitchError::NoAlternate)),
        }
    }

    // ------------------------------------------------------------------
    // Filter switching
    // ------------------------------------------------------------------

    /// Switch to the tab matching `filter`
    ///
    /// An explicit `filter` is remembered together with its ambiguity
    /// tolerance; passing `None` repeats the last explicit switch with the
    /// remembered arguments. `count` steps that many positions through the
    /// candidate set, cyclically; `reverse` walks the other way. The
    /// literal `"#"` toggles to the alternate tab.
    ///
    /// A failed repeat leaves the remembered arguments untouched, so the
    /// next attempt sees the same state.
    ///
    /// # Errors
    ///
    /// [`SwitchError::NoMatch`] and [`SwitchError::AmbiguousMatch`] as
    /// described in the error module; resolution and pattern errors pass
    /// through. Every error is also surfaced through the notify sink.
    pub fn switch_to(
        &mut self,
        list: &mut TabList,
        filter: Option<&str>,
        tolerant: Option<bool>,
        count: Option<usize>,
        reverse: bool,
    ) -> Result<(), SwitchError> {
        let (filter, tolerant) = match filter {
            Some(text) => {
                self.memory.last_filter = text.to_string();
                self.memory.last_tolerant = tolerant.unwrap_or(self.config.tolerant);
                (self.memory.last_filter.clone(), self.memory.last_tolerant)
            }
            None => (
                self.memory.last_filter.clone(),
                tolerant.unwrap_or(self.memory.last_tolerant),
            ),
        };

        if filter == "#" {
            return self.select_alternate(list);
        }

        let step = count.unwrap_or(1).max(1) as isize * if reverse { -1 } else { 1 };

        // A pure numeric reference addresses the all view directly
        if let Some(ordinal) = matching::pattern::ordinal_ref(&filter) {
            let id = ordinal
                .checked_sub(1)
                .and_then(|i| list.all().get(i))
                .map(|t| t.id);
            return match id {
                Some(id) => {
                    self.commit(list, id);
                    Ok(())
                }
                None => {
                    self.notify.alert();
                    Err(ResolveError::NotFound(filter).into())
                }
            };
        }

        // An exact URL wins over pattern matching
        if let Some(id) = list.all().iter().find(|t| t.url == filter).map(|t| t.id) {
            self.commit(list, id);
            return Ok(());
        }

        let query = MatchQuery::filter(Pattern::substring(&filter)).with_scope(Scope::All);
        let candidates: Vec<TabId> = matching::matches(list, &query)?.map(|t| t.id).collect();

        if candidates.is_empty() {
            return Err(self.reported(SwitchError::NoMatch(filter)));
        }
        if candidates.len() > 1 && !tolerant {
            return Err(self.reported(SwitchError::AmbiguousMatch(filter)));
        }

        // Cyclic stepping through the candidate set, anchored at the
        // current tab's position within it
        let len = candidates.len() as isize;
        let mut start = list
            .selected()
            .and_then(|sel| candidates.iter().position(|&c| c == sel))
            .map_or(-1, |p| p as isize);
        if start == -1 && reverse {
            // Counter the natural direction so the first reverse step
            // lands on the last candidate
            start += 1;
        }
        let index = (start + step).rem_euclid(len) as usize;
        self.commit(list, candidates[index]);
        Ok(())
    }

    // ------------------------------------------------------------------
    // Mutation
    // ------------------------------------------------------------------

    /// Move a tab to the position described by `spec`
    ///
    /// Position specs are 1-based here ("move before tab 1" puts the tab
    /// at the front), hence the built-in offset of -1.
    ///
    /// # Errors
    ///
    /// Passes through resolution failures for malformed or out-of-list
    /// specs.
    pub fn move_tab(
        &mut self,
        list: &mut TabList,
        id: TabId,
        spec: &str,
        wrap: bool,
    ) -> Result<(), SwitchError> {
        let index = address::resolve_spec(list, spec, wrap, -1)?;
        list.move_to(id, index);
        self.refresh.schedule();
        Ok(())
    }

    /// Remove `count` tabs anchored at `id`, focusing a neighbour
    ///
    /// `focus_left` removes the anchor and its predecessors and focuses
    /// left of the removed block; otherwise the anchor and its successors
    /// go and focus moves right. Returns whether more than `count` tabs
    /// existed before the removal.
    ///
    /// # Errors
    ///
    /// [`ResolveError::NotFound`] (wrapped) when `id` is not in the list.
    pub fn remove(
        &mut self,
        list: &mut TabList,
        id: TabId,
        count: usize,
        focus_left: bool,
    ) -> Result<bool, SwitchError> {
        // Operate over the visible view unless the anchor is hidden
        let scope: Vec<TabId> = if list.visible_position(id).is_some() {
            list.visible().map(|t| t.id).collect()
        } else {
            list.all().iter().map(|t| t.id).collect()
        };
        let start = scope
            .iter()
            .position(|&t| t == id)
            .ok_or_else(|| ResolveError::NotFound(format!("tab {id}")))?;

        let more = list.len() > count;
        let plan = removal::plan(scope.len(), start, count, focus_left);

        // Fix the victim set before mutating; removal during iteration
        // would skip or double-visit tabs
        let victims: Vec<TabId> = scope[plan.range.clone()].to_vec();
        self.removing = victims.iter().copied().collect();

        if let Some(next) = plan.new_selection {
            // Pre-select the neighbour with the history current slot
            // already pointing at it, so the selection event reads as a
            // re-selection and the alternate survives the removal
            let next_id = scope[next];
            self.history.set_current(next_id);
            list.select(next_id);
            self.history.note_selected(list, &self.removing);
        }

        for victim in victims {
            list.remove(victim);
            self.ordinals.remove(&victim);
            self.history.note_selected(list, &self.removing);
        }

        self.removing.clear();
        self.refresh.schedule();
        Ok(more)
    }

    // ------------------------------------------------------------------
    // Refresh
    // ------------------------------------------------------------------

    /// Note an external list mutation (a tab opened by the surrounding
    /// shell); arms the debounced refresh
    pub fn note_mutation(&mut self) {
        self.refresh.schedule();
    }

    /// Poll the debounced refresh; rebuilds ordinals when it fires
    pub fn poll_refresh(&mut self, list: &TabList) -> bool {
        if self.refresh.poll() {
            self.rebuild_ordinals(list);
            true
        } else {
            false
        }
    }

    /// Rebuild ordinals immediately, cancelling any pending refresh
    pub fn refresh_now(&mut self, list: &TabList) {
        self.refresh.cancel();
        self.rebuild_ordinals(list);
    }

    /// 1-based position of a tab in the visible view, as of the last
    /// refresh
    #[must_use]
    pub fn ordinal(&self, id: TabId) -> Option<usize> {
        self.ordinals.get(&id).copied()
    }

    fn rebuild_ordinals(&mut self, list: &TabList) {
        self.ordinals = list
            .visible()
            .enumerate()
            .map(|(i, t)| (t.id, i + 1))
            .collect();
    }

    fn commit(&mut self, list: &mut TabList, id: TabId) -> bool {
        if list.select(id) {
            self.history.note_selected(list, &self.removing);
            self.refresh.schedule();
            true
        } else {
            false
        }
    }

    fn reported(&self, err: SwitchError) -> SwitchError {
        self.notify.error(&err.to_string());
        err
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::{Notification, RecordingNotify};
    use crate::testing;

    fn controller() -> (TabController, Arc<RecordingNotify>) {
        let notify = Arc::new(RecordingNotify::new());
        let controller =
            TabController::new(NavConfig::default()).with_notify(notify.clone());
        (controller, notify)
    }

    #[test]
    fn test_select_commits_and_records_history() {
        let mut fx = testing::five_tabs();
        let (mut ctl, _notify) = controller();

        ctl.select(&mut fx.list, "2", false);
        assert_eq!(fx.list.selected(), Some(fx.ids[2]));

        ctl.select(&mut fx.list, "$", false);
        assert_eq!(fx.list.selected(), Some(fx.ids[4]));
        assert_eq!(ctl.alternate(&fx.list), Some(fx.ids[2]));
    }

    #[test]
    fn test_select_unresolved_spec_alerts_without_change() {
        let mut fx = testing::five_tabs();
        let (mut ctl, notify) = controller();

        ctl.select(&mut fx.list, "bogus", true);
        assert_eq!(fx.list.selected(), Some(fx.ids[0]));
        assert_eq!(notify.alerts(), 1);
    }

    #[test]
    fn test_alternate_toggle() {
        let mut fx = testing::five_tabs();
        let (mut ctl, _notify) = controller();

        ctl.select(&mut fx.list, "1", false);
        ctl.select(&mut fx.list, "3", false);
        ctl.select_alternate(&mut fx.list).unwrap();
        assert_eq!(fx.list.selected(), Some(fx.ids[1]));
        ctl.select_alternate(&mut fx.list).unwrap();
        assert_eq!(fx.list.selected(), Some(fx.ids[3]));
    }

    #[test]
    fn test_alternate_without_history_errors() {
        let mut fx = testing::five_tabs();
        let (mut ctl, notify) = controller();

        let result = ctl.select_alternate(&mut fx.list);
        assert!(matches!(result, Err(SwitchError::NoAlternate)));
        assert!(matches!(notify.events()[0], Notification::Error(_)));
    }

    #[test]
    fn test_switch_by_ordinal_reference() {
        let mut fx = testing::five_tabs();
        let (mut ctl, _notify) = controller();

        ctl.switch_to(&mut fx.list, Some("3"), None, None, false).unwrap();
        assert_eq!(fx.list.selected(), Some(fx.ids[2]));
    }

    #[test]
    fn test_switch_by_out_of_range_ordinal_alerts() {
        let mut fx = testing::five_tabs();
        let (mut ctl, notify) = controller();

        let result = ctl.switch_to(&mut fx.list, Some("42"), None, None, false);
        assert!(matches!(result, Err(SwitchError::Resolve(_))));
        assert_eq!(notify.alerts(), 1);
        assert_eq!(fx.list.selected(), Some(fx.ids[0]));
    }

    #[test]
    fn test_switch_by_exact_url() {
        let mut fx = testing::five_tabs();
        let (mut ctl, _notify) = controller();

        let url = fx.list.get(fx.ids[3]).unwrap().url.clone();
        ctl.switch_to(&mut fx.list, Some(&url), None, None, false).unwrap();
        assert_eq!(fx.list.selected(), Some(fx.ids[3]));
    }

    #[test]
    fn test_ambiguous_filter_without_tolerance() {
        let mut fx = testing::five_tabs();
        let (mut ctl, notify) = controller();

        let result = ctl.switch_to(&mut fx.list, Some("example.com"), Some(false), None, false);
        assert!(matches!(result, Err(SwitchError::AmbiguousMatch(_))));
        assert_eq!(fx.list.selected(), Some(fx.ids[0]));
        assert!(
            notify
                .events()
                .iter()
                .any(|e| matches!(e, Notification::Error(m) if m.contains("example.com")))
        );
    }

    #[test]
    fn test_tolerant_switch_selects_first_then_repeat_cycles() {
        let mut fx = testing::five_tabs();
        let (mut ctl, _notify) = controller();
        fx.list.select(fx.ids[4]);

        // First match in list order wins; current tab is not a candidate
        // of interest here
        ctl.switch_to(&mut fx.list, Some("a.example.com"), Some(true), None, false)
            .unwrap();
        assert_eq!(fx.list.selected(), Some(fx.ids[0]));

        // With the current tab among the candidates, each call steps one
        // position onward
        let mut fx2 = testing::five_tabs();
        let (mut ctl2, _n2) = controller();
        ctl2.switch_to(&mut fx2.list, Some("example.com"), Some(true), Some(1), false)
            .unwrap();
        assert_eq!(fx2.list.selected(), Some(fx2.ids[1]));
        ctl2.switch_to(&mut fx2.list, None, None, None, false).unwrap();
        assert_eq!(fx2.list.selected(), Some(fx2.ids[2]));
        ctl2.switch_to(&mut fx2.list, None, None, None, false).unwrap();
        assert_eq!(fx2.list.selected(), Some(fx2.ids[3]));
    }

    #[test]
    fn test_switch_idempotent_with_single_candidate() {
        let mut fx = testing::five_tabs();
        let (mut ctl, _notify) = controller();

        ctl.switch_to(&mut fx.list, Some("b.example.com"), Some(false), Some(1), false)
            .unwrap();
        let first = fx.list.selected();
        ctl.switch_to(&mut fx.list, Some("b.example.com"), Some(false), Some(1), false)
            .unwrap();
        assert_eq!(fx.list.selected(), first);
    }

    #[test]
    fn test_cyclic_symmetry_forward_then_reversed_repeat() {
        for k in 1..=7 {
            let mut fx = testing::five_tabs();
            let (mut ctl, _notify) = controller();
            fx.list.select(fx.ids[2]);

            ctl.switch_to(&mut fx.list, Some("example.com"), Some(true), Some(k), false)
                .unwrap();
            ctl.switch_to(&mut fx.list, None, None, Some(k), true).unwrap();
            assert_eq!(fx.list.selected(), Some(fx.ids[2]), "broken at k={k}");
        }
    }

    #[test]
    fn test_reverse_from_outside_candidates_lands_on_last() {
        let mut fx = testing::five_tabs();
        let (mut ctl, _notify) = controller();
        let hidden_from_filter = fx.list.push("Other", "https://other.org");
        fx.list.select(hidden_from_filter);

        ctl.switch_to(&mut fx.list, Some("example.com"), Some(true), None, true)
            .unwrap();
        assert_eq!(fx.list.selected(), Some(fx.ids[4]));
    }

    #[test]
    fn test_no_match_reports_and_aborts() {
        let mut fx = testing::five_tabs();
        let (mut ctl, notify) = controller();

        let result = ctl.switch_to(&mut fx.list, Some("nowhere.invalid"), Some(true), None, false);
        assert!(matches!(result, Err(SwitchError::NoMatch(_))));
        assert_eq!(fx.list.selected(), Some(fx.ids[0]));
        assert!(!notify.events().is_empty());
    }

    #[test]
    fn test_failed_repeat_preserves_memory() {
        let mut fx = testing::five_tabs();
        let (mut ctl, _notify) = controller();

        ctl.switch_to(&mut fx.list, Some("c.example.com"), Some(true), None, false)
            .unwrap();
        assert_eq!(fx.list.selected(), Some(fx.ids[2]));

        // Make the remembered filter temporarily unmatched
        let sole = fx.ids[2];
        let url = fx.list.get(sole).unwrap().url.clone();
        fx.list.remove(sole);
        assert!(ctl.switch_to(&mut fx.list, None, None, None, false).is_err());

        // Memory is unchanged: once a matching tab is back, repeat works
        let back = fx.list.push("C again", url);
        assert!(ctl.switch_to(&mut fx.list, None, None, None, false).is_ok());
        assert_eq!(fx.list.selected(), Some(back));
    }

    #[test]
    fn test_switch_hash_toggles_alternate() {
        let mut fx = testing::five_tabs();
        let (mut ctl, _notify) = controller();

        ctl.select(&mut fx.list, "1", false);
        ctl.select(&mut fx.list, "3", false);
        ctl.switch_to(&mut fx.list, Some("#"), None, None, false).unwrap();
        assert_eq!(fx.list.selected(), Some(fx.ids[1]));
    }

    #[test]
    fn test_remove_scenario_focus_right() {
        // 5 tabs, remove 2 starting at index 1: [1,3) goes, and the tab
        // originally at index 3 ends up selected
        let mut fx = testing::five_tabs();
        let (mut ctl, _notify) = controller();
        fx.list.select(fx.ids[1]);

        let more = ctl.remove(&mut fx.list, fx.ids[1], 2, false).unwrap();
        assert!(more);
        assert_eq!(fx.list.len(), 3);
        assert!(!fx.list.contains(fx.ids[1]));
        assert!(!fx.list.contains(fx.ids[2]));
        assert_eq!(fx.list.selected(), Some(fx.ids[3]));
    }

    #[test]
    fn test_remove_focus_left() {
        let mut fx = testing::five_tabs();
        let (mut ctl, _notify) = controller();
        fx.list.select(fx.ids[3]);

        ctl.remove(&mut fx.list, fx.ids[3], 2, true).unwrap();
        assert!(!fx.list.contains(fx.ids[2]));
        assert!(!fx.list.contains(fx.ids[3]));
        assert_eq!(fx.list.selected(), Some(fx.ids[1]));
    }

    #[test]
    fn test_remove_preserves_alternate_across_transient_selections() {
        let mut fx = testing::five_tabs();
        let (mut ctl, _notify) = controller();

        ctl.select(&mut fx.list, "0", false);
        ctl.select(&mut fx.list, "3", false);
        assert_eq!(ctl.alternate(&fx.list), Some(fx.ids[0]));

        ctl.remove(&mut fx.list, fx.ids[3], 1, false).unwrap();
        assert_eq!(ctl.alternate(&fx.list), Some(fx.ids[0]));
        assert_eq!(fx.list.selected(), Some(fx.ids[4]));
    }

    #[test]
    fn test_remove_whole_list_returns_false() {
        let mut fx = testing::five_tabs();
        let (mut ctl, _notify) = controller();

        let more = ctl.remove(&mut fx.list, fx.ids[0], 5, false).unwrap();
        assert!(!more);
        assert!(fx.list.is_empty());
    }

    #[test]
    fn test_remove_unknown_tab_errors() {
        let mut fx = testing::five_tabs();
        let (mut ctl, _notify) = controller();
        let gone = fx.ids[2];
        fx.list.remove(gone);

        assert!(ctl.remove(&mut fx.list, gone, 1, false).is_err());
    }

    #[test]
    fn test_move_tab_is_one_based() {
        let mut fx = testing::five_tabs();
        let (mut ctl, _notify) = controller();

        ctl.move_tab(&mut fx.list, fx.ids[4], "1", false).unwrap();
        let order: Vec<TabId> = fx.list.all().iter().map(|t| t.id).collect();
        assert_eq!(order[0], fx.ids[4]);
    }

    #[test]
    fn test_ordinals_follow_refresh() {
        let mut fx = testing::five_tabs();
        let (mut ctl, _notify) = controller();

        ctl.refresh_now(&fx.list);
        assert_eq!(ctl.ordinal(fx.ids[0]), Some(1));
        assert_eq!(ctl.ordinal(fx.ids[4]), Some(5));

        fx.list.set_hidden(fx.ids[0], true);
        ctl.refresh_now(&fx.list);
        assert_eq!(ctl.ordinal(fx.ids[0]), None);
        assert_eq!(ctl.ordinal(fx.ids[1]), Some(1));
    }

    #[test]
    fn test_mutation_bursts_coalesce_into_one_refresh() {
        let mut fx = testing::five_tabs();
        // Zero window so the deadline is due immediately after a burst
        let config = NavConfig {
            refresh_debounce_ms: 0,
            ..NavConfig::default()
        };
        let mut ctl =
            TabController::new(config).with_notify(Arc::new(RecordingNotify::new()));

        for _ in 0..10 {
            fx.list.push("Burst", "https://burst.example.com");
            ctl.note_mutation();
        }

        assert!(ctl.poll_refresh(&fx.list));
        assert!(!ctl.poll_refresh(&fx.list));
        assert_eq!(ctl.ordinal(fx.ids[0]), Some(1));
    }
}
