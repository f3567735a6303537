//! IKEv2 payload settings.

use pbk_core::ConnectionRecord;
use plist::Dictionary;

/// IKEv2 entries likewise carry only the invariant payload fields for now.
pub(super) fn apply(_payload: &mut Dictionary, _record: &ConnectionRecord) {}
