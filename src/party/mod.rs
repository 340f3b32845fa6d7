mod io;
mod party;
mod table;

pub use party::{Axis, Party, POLICY_MAX, POLICY_MIN};
pub use table::{PartyRow, PartyTable};
