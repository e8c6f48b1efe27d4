#![no_std]

use common_constants::WAD;
use common_errors::ERROR_DIVISION_BY_ZERO;

multiversx_sc::imports!();

/// Fixed-point helpers shared by the oracle contracts.
///
/// Every operation truncates toward zero; the multiplication always happens
/// before the division so intermediate precision is never lost.
#[multiversx_sc::module]
pub trait SharedMathModule {
    /// `a * b / denominator`, failing on a zero denominator.
    fn mul_div_floor(&self, a: &BigUint, b: &BigUint, denominator: &BigUint) -> BigUint {
        require!(*denominator > 0u64, ERROR_DIVISION_BY_ZERO);

        (a * b) / denominator
    }

    /// Multiplies two WAD-scaled values, keeping WAD scale.
    fn mul_wad_floor(&self, a: &BigUint, b: &BigUint) -> BigUint {
        self.mul_div_floor(a, b, &self.wad())
    }

    /// Divides two values into a WAD-scaled ratio.
    fn div_wad_floor(&self, numerator: &BigUint, denominator: &BigUint) -> BigUint {
        self.mul_div_floor(numerator, &self.wad(), denominator)
    }

    fn wad(&self) -> BigUint {
        BigUint::from(WAD)
    }
}
