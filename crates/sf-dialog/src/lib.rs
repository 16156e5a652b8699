//! Interactive ability-score dialog engine for Scoreforge.
//!
//! Provides the session state machine (rolling, assigning, point buy),
//! the drag payload codec, view derivation, and the host bridge ports.
//! Everything the dialog does except draw: hosts feed events in, persist
//! through their bridge, and render the resulting [`SessionView`].

pub mod config;
pub mod dialog;
pub mod drag;
pub mod error;
pub mod host;
pub mod pool;
pub mod session;
pub mod tray;
pub mod view;

pub use config::DialogConfig;
pub use dialog::{DropTarget, RollerDialog, reset_abilities};
pub use drag::{DragData, DragOrigin, DragPayload};
pub use error::{DialogError, DialogResult, HostError};
pub use host::{FlagStore, HostBridge, MemoryHost, offer_roller};
pub use pool::{RollId, RollPool, RolledValue};
pub use session::{PendingRoll, RollerSession, SessionStep};
pub use tray::{DiceTray, RngTray};
pub use view::{PoolChip, SessionView, SlotView};
