multiversx_sc::imports!();

use common_constants::WAD;

/// Closed `[lower, upper]` range a candidate must fall in, centred on `previous`.
/// `max_swing` is a WAD fraction; the allowance is truncated.
pub fn swing_bounds<M: ManagedTypeApi>(
    previous: &BigUint<M>,
    max_swing: &BigUint<M>,
) -> (BigUint<M>, BigUint<M>) {
    let allowable = (previous * max_swing) / BigUint::from(WAD);

    (previous - &allowable, previous + &allowable)
}

pub fn is_within_swing<M: ManagedTypeApi>(
    previous: &BigUint<M>,
    candidate: &BigUint<M>,
    max_swing: &BigUint<M>,
) -> bool {
    let (lower, upper) = swing_bounds(previous, max_swing);

    candidate >= &lower && candidate <= &upper
}

#[multiversx_sc::module]
pub trait SwingGuardModule:
    crate::storage::StorageModule + crate::events::EventsModule
{
    /// Returns the value to record for `candidate` and whether it was trusted.
    /// A rejected candidate is not an error: it is reported and `previous` stands in for it.
    fn guard_sample(&self, previous: &BigUint, candidate: BigUint, timestamp: u64) -> (BigUint, bool) {
        let max_swing = self.max_swing().get();
        if is_within_swing(previous, &candidate, &max_swing) {
            return (candidate, true);
        }

        self.anomaly_detected_event(previous, &candidate, timestamp);

        (previous.clone(), false)
    }
}
