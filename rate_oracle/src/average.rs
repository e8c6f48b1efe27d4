use common_structs::AveragingMode;
use multiversx_sc::imports::*;

/// Half-open index range `[start, end)` summed by the moving average,
/// and the count the sum is divided by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AverageWindow {
    pub start: usize,
    pub end: usize,
    pub divisor: usize,
}

/// Picks the samples the average is taken over.
///
/// Once the latest index is past `window_size` the newest `window_size` samples are
/// averaged. Before that the whole series is divided by its length; in `Legacy` mode
/// the newest sample is left out of the sum but still counted.
pub fn window(length: usize, window_size: usize, mode: AveragingMode) -> Option<AverageWindow> {
    if length == 0 || window_size == 0 {
        return None;
    }

    let latest_index = length - 1;
    if latest_index > window_size {
        return Some(AverageWindow {
            start: latest_index + 1 - window_size,
            end: length,
            divisor: window_size,
        });
    }

    let end = match mode {
        AveragingMode::Legacy => latest_index,
        AveragingMode::Inclusive => length,
    };

    Some(AverageWindow {
        start: 0,
        end,
        divisor: length,
    })
}

/// Truncating mean over the window selected by [`window`].
/// `value_at` is called once per summed index, oldest first.
pub fn calculate<M, F>(
    length: usize,
    window_size: usize,
    mode: AveragingMode,
    mut value_at: F,
) -> Option<BigUint<M>>
where
    M: ManagedTypeApi,
    F: FnMut(usize) -> BigUint<M>,
{
    let window = window(length, window_size, mode)?;

    let mut sum = BigUint::zero();
    for index in window.start..window.end {
        sum += value_at(index);
    }

    Some(sum / BigUint::from(window.divisor))
}
