//! The transition function driving the client.
//!
//! [`update`] is pure: it consumes a message and the current state and hands
//! back the next state plus the effects a dispatcher must perform. Nothing in
//! here touches the network or the page.

use alloc::string::String;
use cluegrid_protocol::{Inbound, SyncMessage};
use smallvec::{SmallVec, smallvec};

use crate::*;

pub const DEFAULT_PUZZLE_URL: &str = "data/puzzle.json";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub puzzle_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            puzzle_url: DEFAULT_PUZZLE_URL.into(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Msg {
    FetchedData(core::result::Result<PuzzleState, LoadError>),
    /// Physical key identifier, e.g. `KeyA`.
    KeyPressed(String),
    CellClicked(Coord2),
    ClueClicked(ClueIndex),
    /// Edit made by a collaborator.
    CellUpdate(CellUpdateData),
    CloseModal,
    SetModalInfo,
    SolveActiveClue,
    CheckActiveClue,
    /// Socket payload with no dedicated message.
    HandleSocketMessage(serde_json::Value),
    OtherClueUpdated(Option<ClueIndex>),
    ScrollSettled,
    NoOp,
}

impl From<Inbound> for Msg {
    fn from(inbound: Inbound) -> Self {
        match inbound {
            Inbound::Sync(SyncMessage::CellUpdate(data)) => Msg::CellUpdate(data),
            Inbound::Sync(SyncMessage::ClueIndex(index)) => Msg::OtherClueUpdated(index),
            // Replays are served by the sync server.
            Inbound::Sync(SyncMessage::RequestAllCells) => Msg::NoOp,
            Inbound::Other(value) => Msg::HandleSocketMessage(value),
        }
    }
}

/// Work requested from the outside world.
#[derive(Clone, Debug, PartialEq)]
pub enum Effect {
    FetchPuzzle { url: String },
    RequestAllCells,
    /// Bring the clue with this index into view.
    ScrollToClue(ClueIndex),
    BroadcastClueIndex(Option<ClueIndex>),
    SendCellUpdate(CellUpdateData),
}

impl Effect {
    /// Message to put on the collaborator channel, if this effect is one.
    pub fn sync_message(&self) -> Option<SyncMessage> {
        match *self {
            Self::RequestAllCells => Some(SyncMessage::RequestAllCells),
            Self::BroadcastClueIndex(index) => Some(SyncMessage::ClueIndex(index)),
            Self::SendCellUpdate(data) => Some(SyncMessage::CellUpdate(data)),
            Self::FetchPuzzle { .. } | Self::ScrollToClue(_) => None,
        }
    }
}

pub type Effects = SmallVec<[Effect; 4]>;

/// Starting state: fetch the document and ask peers for their fills.
pub fn init(config: &Config) -> (AppState, Effects) {
    log::debug!("init: puzzle_url={}", config.puzzle_url);
    let effects = smallvec![
        Effect::FetchPuzzle {
            url: config.puzzle_url.clone(),
        },
        Effect::RequestAllCells,
    ];
    (AppState::Loading, effects)
}

pub fn update(msg: Msg, state: AppState) -> (AppState, Effects) {
    match state {
        AppState::Loading => match msg {
            Msg::FetchedData(Ok(puzzle)) => {
                log::debug!("puzzle loaded: {:?}", puzzle.size());
                (AppState::Loaded(puzzle), Effects::new())
            }
            Msg::FetchedData(Err(err)) => {
                log::warn!("puzzle failed to load: {}", err);
                (AppState::Failure, Effects::new())
            }
            msg => {
                log::trace!("loading, dropped {:?}", msg);
                (AppState::Loading, Effects::new())
            }
        },
        AppState::Loaded(mut puzzle) => {
            let effects = puzzle.handle(msg);
            (AppState::Loaded(puzzle), effects)
        }
        AppState::Failure => (AppState::Failure, Effects::new()),
    }
}

impl PuzzleState {
    /// Scroll to the active clue and tell peers which clue it is.
    fn scroll_effects(&self) -> Effects {
        smallvec![
            Effect::ScrollToClue(self.active_clue_index.unwrap_or(0)),
            Effect::BroadcastClueIndex(self.active_clue_index),
        ]
    }

    fn handle(&mut self, msg: Msg) -> Effects {
        log::trace!("handle {:?}", msg);
        match msg {
            Msg::KeyPressed(code) => self.handle_key(decode_key(&code)),
            Msg::CellClicked(coords) => {
                if !self.select_cell(coords).has_update() {
                    log::debug!("click on {:?} ignored", coords);
                }
                self.scroll_effects()
            }
            Msg::ClueClicked(index) => {
                if !self.set_active_clue(index).has_update() {
                    log::debug!("clue {} already active or unreachable", index);
                }
                self.scroll_effects()
            }
            Msg::CellUpdate(data) => {
                if !self.apply_cell_update(&data).has_update() {
                    log::trace!("cell update {:?} changed nothing", data);
                }
                Effects::new()
            }
            Msg::CloseModal => {
                self.set_modal(Modal::Empty);
                Effects::new()
            }
            Msg::SetModalInfo => {
                self.set_modal(Modal::Info);
                Effects::new()
            }
            Msg::SolveActiveClue => self
                .solve_active_clue()
                .into_iter()
                .map(Effect::SendCellUpdate)
                .collect(),
            Msg::CheckActiveClue => self
                .check_active_clue()
                .into_iter()
                .map(Effect::SendCellUpdate)
                .collect(),
            Msg::OtherClueUpdated(index) => {
                self.set_other_clue(index);
                Effects::new()
            }
            Msg::HandleSocketMessage(value) => {
                log::debug!("unhandled socket message: {}", value);
                Effects::new()
            }
            Msg::FetchedData(_) => {
                log::debug!("puzzle already loaded, ignoring fetch result");
                Effects::new()
            }
            Msg::ScrollSettled | Msg::NoOp => Effects::new(),
        }
    }

    fn handle_key(&mut self, input: KeyInput) -> Effects {
        log::trace!("key {:?}", input);
        match input {
            KeyInput::Control(ControlKey::Escape) => {
                self.set_modal(Modal::Empty);
                return Effects::new();
            }
            KeyInput::Letter(letter) => return self.edit_effects(Some(letter)),
            KeyInput::Control(ControlKey::Backspace) => return self.edit_effects(None),
            KeyInput::Control(ControlKey::Enter) => {
                self.toggle_active_clue();
            }
            KeyInput::Control(ControlKey::Tab) => {
                self.select_next_clue();
            }
            KeyInput::Control(ControlKey::ShiftTab) => {
                self.select_previous_clue();
            }
            KeyInput::Arrow(arrow) => {
                let outcome = match arrow {
                    ArrowKey::Up => self.move_up(),
                    ArrowKey::Down => self.move_down(),
                    ArrowKey::Left => self.move_left(),
                    ArrowKey::Right => self.move_right(),
                };
                if !outcome.has_update() {
                    log::trace!("{:?} from {:?} stays put", arrow, self.active_cell);
                }
            }
            KeyInput::Unsupported => {}
        }
        self.scroll_effects()
    }

    fn edit_effects(&mut self, letter: Option<char>) -> Effects {
        let mut effects = Effects::new();
        match self.change_active_entry(letter) {
            Some(edit) => effects.push(Effect::SendCellUpdate(edit)),
            None => log::debug!("edit {:?} without active cell", letter),
        }
        effects.extend(self.scroll_effects());
        effects
    }
}
