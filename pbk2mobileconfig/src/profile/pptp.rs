//! PPTP payload settings.

use pbk_core::ConnectionRecord;
use plist::Dictionary;

/// PPTP entries currently convert with the invariant payload fields only;
/// no type-specific block is emitted yet.
// TODO: emit the PPTP tunnel/PPP block once the key set is confirmed against
// a managed device.
pub(super) fn apply(_payload: &mut Dictionary, _record: &ConnectionRecord) {}
