//! # Tracker
//!
//! Wires the item store, the persistence gateway and the presentation
//! surface together. Every user action follows the same sequence:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    One User Action                                      │
//! │                                                                         │
//! │  surface.item_input()          raw (name, calories)                     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  store.add / update / remove   in-memory mutation                       │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  gateway.save(list).await      durable before anything is rendered      │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  surface.add_list_item(..)     reflect the change                       │
//! │  surface.show_total_calories(store.total_calories())                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! If `save` fails the mutation stays applied in memory, nothing is
//! rendered, and the error is returned; the next successful save writes the
//! full list again.

use calorie_core::validation::validate_item_name;
use calorie_core::{CoreError, Item, ItemId, ItemStore};
use calorie_db::PersistenceGateway;
use tracing::{debug, info};

use crate::error::ApiResult;
use crate::surface::PresentationSurface;

/// The orchestrator.
#[derive(Debug)]
pub struct Tracker<G, S> {
    store: ItemStore,
    gateway: G,
    surface: S,
}

impl<G, S> Tracker<G, S>
where
    G: PersistenceGateway,
    S: PresentationSurface,
{
    /// Creates a tracker around an (usually empty) store.
    ///
    /// Call [`Tracker::init`] before handling user actions.
    pub fn new(store: ItemStore, gateway: G, surface: S) -> Self {
        Tracker {
            store,
            gateway,
            surface,
        }
    }

    pub fn store(&self) -> &ItemStore {
        &self.store
    }

    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Hydrates the store from storage and renders the initial screen.
    pub async fn init(&mut self) -> ApiResult<()> {
        self.surface.clear_edit_state();

        let items = self.gateway.load().await?;
        self.store.hydrate(items)?;

        info!(count = self.store.len(), "Item store hydrated");

        if self.store.is_empty() {
            self.surface.hide_list();
        } else {
            self.surface.populate_item_list(self.store.list());
        }
        self.render_total();

        Ok(())
    }

    /// Adds the item currently in the form.
    ///
    /// ## Returns
    /// - `Ok(None)` if either field is blank (nothing happens)
    /// - `Ok(Some(item))` with the stored item
    pub async fn submit_item(&mut self) -> ApiResult<Option<Item>> {
        let input = self.surface.item_input();
        if input.is_blank() {
            debug!("Ignoring blank item submission");
            return Ok(None);
        }

        let name = validate_item_name(&input.name)?;
        let item = self.store.add(name, input.calories.as_str())?.clone();

        self.gateway.save(self.store.list()).await?;

        debug!(id = %item.id, calories = %item.calories, "Item added");

        self.surface.add_list_item(&item);
        self.render_total();
        self.surface.clear_input();

        Ok(Some(item))
    }

    /// Selects an item and puts the form into edit mode.
    pub fn begin_edit(&mut self, id: ItemId) -> ApiResult<Item> {
        let item = self
            .store
            .find_by_id(id)
            .cloned()
            .ok_or(CoreError::ItemNotFound(id))?;

        self.store.set_current(Some(id));

        self.surface.fill_edit_form(&item);
        self.surface.show_edit_state();

        Ok(item)
    }

    /// Applies the form to the selected item.
    pub async fn submit_update(&mut self) -> ApiResult<Item> {
        let input = self.surface.item_input();

        let name = validate_item_name(&input.name)?;
        let item = self.store.update(name, input.calories.as_str())?.clone();

        self.gateway.save(self.store.list()).await?;

        debug!(id = %item.id, calories = %item.calories, "Item updated");

        self.surface.update_list_item(&item);
        self.render_total();
        self.leave_edit_state();

        Ok(item)
    }

    /// Deletes the selected item.
    ///
    /// ## Returns
    /// - `Ok(Some(item))` with the item actually removed; under
    ///   [`calorie_core::RemovalPolicy::Positional`] this may not be the
    ///   selected one, and the surface is told to delete the removed row
    /// - `Ok(None)` when nothing matched (no-op, edit state still closed)
    pub async fn submit_delete(&mut self) -> ApiResult<Option<Item>> {
        let id = self.store.current_id().ok_or(CoreError::NoSelection)?;

        let removed = self.store.remove(id);

        if let Some(item) = &removed {
            self.gateway.save(self.store.list()).await?;

            debug!(id = %item.id, "Item deleted");

            self.surface.delete_list_item(item.id);
            self.render_total();
            if self.store.is_empty() {
                self.surface.hide_list();
            }
        } else {
            debug!(id = %id, "Delete matched no item");
        }

        self.leave_edit_state();
        Ok(removed)
    }

    /// Removes every item and wipes durable storage.
    pub async fn clear_all(&mut self) -> ApiResult<()> {
        self.store.clear_all();
        self.gateway.clear().await?;

        info!("All items cleared");

        self.surface.clear_list();
        self.surface.hide_list();
        self.render_total();
        self.leave_edit_state();

        Ok(())
    }

    /// Abandons an edit without changing anything.
    pub fn cancel_edit(&mut self) {
        self.leave_edit_state();
    }

    fn leave_edit_state(&mut self) {
        self.store.set_current(None);
        self.surface.clear_input();
        self.surface.clear_edit_state();
    }

    fn render_total(&mut self) {
        self.surface.show_total_calories(self.store.total_calories());
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    use calorie_core::{Calories, RemovalPolicy};
    use calorie_db::{Database, DbConfig, DbError, DbResult, MemoryGateway};

    use crate::error::ErrorCode;
    use crate::surface::ItemInput;

    #[derive(Debug, Clone, PartialEq, Eq)]
    enum Event {
        Saved(usize),
        Cleared,
        Populate(usize),
        AddRow(u64),
        UpdateRow(u64),
        DeleteRow(u64),
        ClearList,
        HideList,
        Total(i64),
        ClearInput,
        FillForm(u64),
        ShowEdit,
        ClearEdit,
    }

    type Log = Arc<Mutex<Vec<Event>>>;

    struct RecordingSurface {
        input: ItemInput,
        log: Log,
    }

    impl PresentationSurface for RecordingSurface {
        fn item_input(&self) -> ItemInput {
            self.input.clone()
        }
        fn populate_item_list(&mut self, items: &[Item]) {
            self.log.lock().unwrap().push(Event::Populate(items.len()));
        }
        fn add_list_item(&mut self, item: &Item) {
            self.log.lock().unwrap().push(Event::AddRow(item.id.get()));
        }
        fn update_list_item(&mut self, item: &Item) {
            self.log.lock().unwrap().push(Event::UpdateRow(item.id.get()));
        }
        fn delete_list_item(&mut self, id: ItemId) {
            self.log.lock().unwrap().push(Event::DeleteRow(id.get()));
        }
        fn clear_list(&mut self) {
            self.log.lock().unwrap().push(Event::ClearList);
        }
        fn hide_list(&mut self) {
            self.log.lock().unwrap().push(Event::HideList);
        }
        fn show_total_calories(&mut self, total: i64) {
            self.log.lock().unwrap().push(Event::Total(total));
        }
        fn clear_input(&mut self) {
            self.input = ItemInput::default();
            self.log.lock().unwrap().push(Event::ClearInput);
        }
        fn fill_edit_form(&mut self, item: &Item) {
            self.input = ItemInput::new(item.name.clone(), item.calories.to_string());
            self.log.lock().unwrap().push(Event::FillForm(item.id.get()));
        }
        fn show_edit_state(&mut self) {
            self.log.lock().unwrap().push(Event::ShowEdit);
        }
        fn clear_edit_state(&mut self) {
            self.log.lock().unwrap().push(Event::ClearEdit);
        }
    }

    /// MemoryGateway that records saves into the shared log.
    struct RecordingGateway {
        inner: MemoryGateway,
        log: Log,
        fail_saves: bool,
    }

    impl PersistenceGateway for RecordingGateway {
        async fn save(&self, items: &[Item]) -> DbResult<()> {
            if self.fail_saves {
                return Err(DbError::QueryFailed("disk I/O error".to_string()));
            }
            self.inner.save(items).await?;
            self.log.lock().unwrap().push(Event::Saved(items.len()));
            Ok(())
        }
        async fn load(&self) -> DbResult<Option<Vec<Item>>> {
            self.inner.load().await
        }
        async fn clear(&self) -> DbResult<()> {
            self.inner.clear().await?;
            self.log.lock().unwrap().push(Event::Cleared);
            Ok(())
        }
    }

    fn tracker_with(
        policy: RemovalPolicy,
        fail_saves: bool,
    ) -> (Tracker<RecordingGateway, RecordingSurface>, Log) {
        let log: Log = Arc::default();
        let gateway = RecordingGateway {
            inner: MemoryGateway::new(),
            log: log.clone(),
            fail_saves,
        };
        let surface = RecordingSurface {
            input: ItemInput::default(),
            log: log.clone(),
        };
        (
            Tracker::new(ItemStore::with_policy(policy), gateway, surface),
            log,
        )
    }

    fn tracker() -> (Tracker<RecordingGateway, RecordingSurface>, Log) {
        tracker_with(RemovalPolicy::ById, false)
    }

    fn take(log: &Log) -> Vec<Event> {
        std::mem::take(&mut *log.lock().unwrap())
    }

    async fn submit(
        tracker: &mut Tracker<RecordingGateway, RecordingSurface>,
        name: &str,
        calories: &str,
    ) -> Option<Item> {
        tracker.surface_mut().input = ItemInput::new(name, calories);
        tracker.submit_item().await.unwrap()
    }

    #[tokio::test]
    async fn test_init_on_first_run_hides_list() {
        let (mut tracker, log) = tracker();

        tracker.init().await.unwrap();

        assert_eq!(
            take(&log),
            vec![Event::ClearEdit, Event::HideList, Event::Total(0)]
        );
    }

    #[tokio::test]
    async fn test_init_populates_from_storage() {
        let (mut tracker, log) = tracker();
        let items = vec![
            Item::new(ItemId::new(0), "Egusi soup", Calories::new(1150).unwrap()),
            Item::new(ItemId::new(1), "Egg sauce", Calories::new(300).unwrap()),
        ];
        tracker.gateway().inner.save(&items).await.unwrap();

        tracker.init().await.unwrap();

        assert_eq!(tracker.store().list(), items.as_slice());
        assert_eq!(
            take(&log),
            vec![Event::ClearEdit, Event::Populate(2), Event::Total(1450)]
        );
    }

    #[tokio::test]
    async fn test_init_rejects_out_of_range_snapshot() {
        for raw in [
            r#"[{"id":0,"name":"a","calories":-500},{"id":1,"name":"b","calories":9223372036854775807}]"#,
            r#"[{"id":18446744073709551615,"name":"x","calories":1}]"#,
        ] {
            let (mut tracker, log) = tracker();
            tracker.gateway().inner.set_item(calorie_db::ITEMS_KEY, raw).await;

            let err = tracker.init().await.unwrap_err();

            assert_eq!(err.code, ErrorCode::DatabaseError);
            assert!(tracker.store().is_empty());
            assert_eq!(take(&log), vec![Event::ClearEdit]);
        }
    }

    #[tokio::test]
    async fn test_submit_saves_before_rendering() {
        let (mut tracker, log) = tracker();
        tracker.init().await.unwrap();
        take(&log);

        let item = submit(&mut tracker, "Egg", "300").await.unwrap();

        assert_eq!(item.id, ItemId::new(0));
        assert_eq!(
            take(&log),
            vec![
                Event::Saved(1),
                Event::AddRow(0),
                Event::Total(300),
                Event::ClearInput,
            ]
        );
        assert_eq!(tracker.surface().input, ItemInput::default());
    }

    #[tokio::test]
    async fn test_blank_submission_ignored() {
        let (mut tracker, log) = tracker();

        assert!(submit(&mut tracker, "", "300").await.is_none());
        assert!(submit(&mut tracker, "Egg", "  ").await.is_none());

        assert!(tracker.store().is_empty());
        assert!(take(&log).is_empty());
    }

    #[tokio::test]
    async fn test_invalid_calories_rejected() {
        let (mut tracker, log) = tracker();
        tracker.surface_mut().input = ItemInput::new("Egg", "three hundred");

        let err = tracker.submit_item().await.unwrap_err();

        assert_eq!(err.code, ErrorCode::ValidationError);
        assert!(tracker.store().is_empty());
        assert!(take(&log).is_empty());
    }

    #[tokio::test]
    async fn test_edit_and_update_flow() {
        let (mut tracker, log) = tracker();
        submit(&mut tracker, "Egg", "300").await;
        submit(&mut tracker, "Rice", "500").await;
        take(&log);

        let selected = tracker.begin_edit(ItemId::new(0)).unwrap();
        assert_eq!(selected.name, "Egg");
        assert_eq!(tracker.surface().input, ItemInput::new("Egg", "300"));

        tracker.surface_mut().input = ItemInput::new("Egg Large", "350");
        let updated = tracker.submit_update().await.unwrap();

        assert_eq!(updated.name, "Egg Large");
        assert_eq!(tracker.store().total_calories(), 850);
        assert_eq!(tracker.store().current_id(), None);
        assert_eq!(
            take(&log),
            vec![
                Event::FillForm(0),
                Event::ShowEdit,
                Event::Saved(2),
                Event::UpdateRow(0),
                Event::Total(850),
                Event::ClearInput,
                Event::ClearEdit,
            ]
        );

        let stored = tracker.gateway().load().await.unwrap().unwrap();
        assert_eq!(stored, tracker.store().list());
    }

    #[tokio::test]
    async fn test_begin_edit_unknown_item() {
        let (mut tracker, _log) = tracker();

        let err = tracker.begin_edit(ItemId::new(3)).unwrap_err();

        assert_eq!(err.code, ErrorCode::NotFound);
        assert_eq!(tracker.store().current_id(), None);
    }

    #[tokio::test]
    async fn test_update_without_selection() {
        let (mut tracker, _log) = tracker();
        submit(&mut tracker, "Egg", "300").await;
        tracker.surface_mut().input = ItemInput::new("Egg", "1");

        let err = tracker.submit_update().await.unwrap_err();

        assert_eq!(err.code, ErrorCode::InvalidState);
    }

    #[tokio::test]
    async fn test_delete_selected_item() {
        let (mut tracker, log) = tracker();
        submit(&mut tracker, "Egg", "300").await;
        submit(&mut tracker, "Rice", "500").await;
        tracker.begin_edit(ItemId::new(1)).unwrap();
        take(&log);

        let removed = tracker.submit_delete().await.unwrap().unwrap();

        assert_eq!(removed.name, "Rice");
        assert_eq!(
            take(&log),
            vec![
                Event::Saved(1),
                Event::DeleteRow(1),
                Event::Total(300),
                Event::ClearInput,
                Event::ClearEdit,
            ]
        );
    }

    #[tokio::test]
    async fn test_delete_last_item_hides_list() {
        let (mut tracker, log) = tracker();
        submit(&mut tracker, "Egg", "300").await;
        tracker.begin_edit(ItemId::new(0)).unwrap();
        take(&log);

        tracker.submit_delete().await.unwrap();

        assert!(take(&log).contains(&Event::HideList));
    }

    #[tokio::test]
    async fn test_delete_without_selection() {
        let (mut tracker, _log) = tracker();

        let err = tracker.submit_delete().await.unwrap_err();

        assert_eq!(err.code, ErrorCode::InvalidState);
    }

    #[tokio::test]
    async fn test_positional_delete_renders_removed_row() {
        let (mut tracker, log) = tracker_with(RemovalPolicy::Positional, false);
        for name in ["a", "b", "c"] {
            submit(&mut tracker, name, "10").await;
        }
        tracker.begin_edit(ItemId::new(0)).unwrap();
        tracker.submit_delete().await.unwrap();
        tracker.begin_edit(ItemId::new(1)).unwrap();
        take(&log);

        let removed = tracker.submit_delete().await.unwrap().unwrap();

        // Offset 1 now holds the item with id 2
        assert_eq!(removed.id, ItemId::new(2));
        assert!(take(&log).contains(&Event::DeleteRow(2)));
        assert_eq!(tracker.store().list()[0].id, ItemId::new(1));
    }

    #[tokio::test]
    async fn test_clear_all_wipes_storage() {
        let (mut tracker, log) = tracker();
        tracker.gateway().inner.set_item("theme", "dark").await;
        submit(&mut tracker, "Egg", "300").await;
        tracker.begin_edit(ItemId::new(0)).unwrap();
        take(&log);

        tracker.clear_all().await.unwrap();

        assert!(tracker.store().is_empty());
        assert_eq!(tracker.store().current_id(), None);
        assert!(tracker.gateway().inner.is_empty().await);
        assert_eq!(
            take(&log),
            vec![
                Event::Cleared,
                Event::ClearList,
                Event::HideList,
                Event::Total(0),
                Event::ClearInput,
                Event::ClearEdit,
            ]
        );
    }

    #[tokio::test]
    async fn test_failed_save_skips_render() {
        let (mut tracker, log) = tracker_with(RemovalPolicy::ById, true);
        tracker.surface_mut().input = ItemInput::new("Egg", "300");

        let err = tracker.submit_item().await.unwrap_err();

        assert_eq!(err.code, ErrorCode::DatabaseError);
        assert_eq!(tracker.store().len(), 1);
        assert!(take(&log).is_empty());
    }

    #[tokio::test]
    async fn test_cancel_edit() {
        let (mut tracker, log) = tracker();
        submit(&mut tracker, "Egg", "300").await;
        tracker.begin_edit(ItemId::new(0)).unwrap();
        take(&log);

        tracker.cancel_edit();

        assert_eq!(tracker.store().current_id(), None);
        assert_eq!(take(&log), vec![Event::ClearInput, Event::ClearEdit]);
    }

    #[tokio::test]
    async fn test_state_survives_restart_with_sqlite() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let log: Log = Arc::default();
        let surface = || RecordingSurface {
            input: ItemInput::default(),
            log: log.clone(),
        };

        let mut first = Tracker::new(ItemStore::new(), db.local_storage(), surface());
        first.init().await.unwrap();
        first.surface_mut().input = ItemInput::new("Egg", "300");
        first.submit_item().await.unwrap();
        first.surface_mut().input = ItemInput::new("Rice", "500");
        first.submit_item().await.unwrap();

        let mut second = Tracker::new(ItemStore::new(), db.local_storage(), surface());
        second.init().await.unwrap();

        assert_eq!(second.store().list(), first.store().list());
        assert_eq!(second.store().total_calories(), 800);
    }
}
