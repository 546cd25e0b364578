use docket_core::{AgendaItem, ItemId, ItemStatus, Priority};
use docket_parse::Parser;

use crate::{BoardError, ItemPatch};

/// Where an item currently lives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Location {
    Agenda(usize),
    ParkingLot(usize),
}

/// The editable agenda: an ordered item sequence plus the parking lot of
/// deferred items. An item is in exactly one of the two.
///
/// Items in the parking lot keep the `order` they had when they were
/// deferred; it is only refreshed when they are restored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Board {
    items: Vec<AgendaItem>,
    parking_lot: Vec<AgendaItem>,
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap parser output as-is.
    pub fn from_items(items: Vec<AgendaItem>) -> Self {
        Self {
            items,
            parking_lot: Vec::new(),
        }
    }

    pub fn load(text: &str, parser: &Parser) -> Self {
        Self::from_items(parser.parse(text))
    }

    /// Replace everything with a fresh parse. Prior items and the parking
    /// lot are discarded unconditionally. Returns the new item count.
    pub fn reparse(&mut self, text: &str, parser: &Parser) -> usize {
        let discarded = self.items.len() + self.parking_lot.len();
        *self = Self::load(text, parser);
        tracing::debug!(discarded, parsed = self.items.len(), "reparsed agenda");
        self.items.len()
    }

    pub fn clear(&mut self) {
        self.items.clear();
        self.parking_lot.clear();
    }

    pub fn items(&self) -> &[AgendaItem] {
        &self.items
    }

    pub fn parking_lot(&self) -> &[AgendaItem] {
        &self.parking_lot
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn locate(&self, id: ItemId) -> Option<Location> {
        if let Some(i) = self.items.iter().position(|item| item.id == id) {
            return Some(Location::Agenda(i));
        }
        self.parking_lot
            .iter()
            .position(|item| item.id == id)
            .map(Location::ParkingLot)
    }

    pub fn get(&self, id: ItemId) -> Option<&AgendaItem> {
        match self.locate(id)? {
            Location::Agenda(i) => self.items.get(i),
            Location::ParkingLot(i) => self.parking_lot.get(i),
        }
    }

    /// Index of an item in the main sequence.
    pub fn position(&self, id: ItemId) -> Result<usize, BoardError> {
        match self.locate(id) {
            Some(Location::Agenda(i)) => Ok(i),
            Some(Location::ParkingLot(_)) => Err(BoardError::Parked(id)),
            None => Err(BoardError::ItemNotFound(id)),
        }
    }

    /// Move the item at `from` to index `to`, then renumber every `order`.
    pub fn reorder(&mut self, from: usize, to: usize) -> Result<(), BoardError> {
        let len = self.items.len();
        for index in [from, to] {
            if index >= len {
                return Err(BoardError::IndexOutOfRange { index, len });
            }
        }
        let item = self.items.remove(from);
        self.items.insert(to, item);
        self.renumber();
        Ok(())
    }

    /// Drop `active` onto the slot currently held by `over`.
    pub fn move_item(&mut self, active: ItemId, over: ItemId) -> Result<(), BoardError> {
        if active == over {
            return Ok(());
        }
        let from = self.position(active)?;
        let to = self.position(over)?;
        self.reorder(from, to)
    }

    /// Swap an item with its predecessor. Returns false at the top.
    pub fn move_up(&mut self, id: ItemId) -> Result<bool, BoardError> {
        let index = self.position(id)?;
        if index == 0 {
            return Ok(false);
        }
        self.reorder(index, index - 1)?;
        Ok(true)
    }

    /// Swap an item with its successor. Returns false at the bottom.
    pub fn move_down(&mut self, id: ItemId) -> Result<bool, BoardError> {
        let index = self.position(id)?;
        if index + 1 >= self.items.len() {
            return Ok(false);
        }
        self.reorder(index, index + 1)?;
        Ok(true)
    }

    /// Replace an item (in either collection) with its edited copy.
    ///
    /// A title that is blank once trimmed is rejected and the item is left
    /// as it was.
    pub fn update(&mut self, id: ItemId, patch: &ItemPatch) -> Result<&AgendaItem, BoardError> {
        if patch.title.as_deref().is_some_and(|t| t.trim().is_empty()) {
            return Err(BoardError::EmptyTitle(id));
        }
        let slot = self.slot_mut(id)?;
        *slot = patch.apply_to(slot);
        Ok(&*slot)
    }

    pub fn set_priority(
        &mut self,
        id: ItemId,
        priority: Priority,
    ) -> Result<&AgendaItem, BoardError> {
        let patch = ItemPatch {
            priority: Some(priority),
            ..ItemPatch::default()
        };
        self.update(id, &patch)
    }

    /// Numeric shortcut: 1 = Critical through 5 = Ongoing.
    pub fn set_priority_level(
        &mut self,
        id: ItemId,
        level: u8,
    ) -> Result<&AgendaItem, BoardError> {
        let priority = Priority::from_level(level)?;
        self.set_priority(id, priority)
    }

    /// Change an item's status.
    ///
    /// Deferring moves the item to the end of the parking lot and leaves the
    /// remaining orders as they are. Any other status on a parked item
    /// brings it back to the end of the agenda and renumbers it. Returns the
    /// item's new location.
    pub fn set_status(
        &mut self,
        id: ItemId,
        status: ItemStatus,
    ) -> Result<Location, BoardError> {
        let location = self.locate(id).ok_or(BoardError::ItemNotFound(id))?;
        match (location, status) {
            (Location::Agenda(i), ItemStatus::Deferred) => {
                let item = self.items.remove(i);
                self.parking_lot.push(item.with_status(status));
                tracing::debug!(%id, "moved item to parking lot");
                Ok(Location::ParkingLot(self.parking_lot.len() - 1))
            }
            (Location::Agenda(i), _) => {
                self.items[i] = self.items[i].with_status(status);
                Ok(location)
            }
            (Location::ParkingLot(_), ItemStatus::Deferred) => Ok(location),
            (Location::ParkingLot(i), _) => {
                let item = self.parking_lot.remove(i);
                self.items.push(item.with_status(status));
                self.renumber();
                tracing::debug!(%id, %status, "restored item from parking lot");
                Ok(Location::Agenda(self.items.len() - 1))
            }
        }
    }

    fn slot_mut(&mut self, id: ItemId) -> Result<&mut AgendaItem, BoardError> {
        match self.locate(id) {
            Some(Location::Agenda(i)) => Ok(&mut self.items[i]),
            Some(Location::ParkingLot(i)) => Ok(&mut self.parking_lot[i]),
            None => Err(BoardError::ItemNotFound(id)),
        }
    }

    fn renumber(&mut self) {
        for (index, item) in self.items.iter_mut().enumerate() {
            item.order = index;
        }
    }
}
