use crate::error::ContainerError;

const DEFAULT_COEFFICIENT: f32 = 1.5;

/// Largest coefficient accepted for either strategy.
pub const MAX_COEFFICIENT: f32 = 1_048_576.0;

// Decimal places kept for coefficients below 10; one fewer per extra integer
// digit, so seven significant digits survive in total.
const MAX_DECIMAL_SCALE: u64 = 1_000_000;

/// How a `GrowBuf` computes its next capacity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ResizeStrategy {
    /// `capacity = ceil(len + coefficient)`
    Additive,
    /// `capacity = ceil(len * coefficient)`
    #[default]
    Multiplicative,
}

/// Resize strategy together with its coefficient.
///
/// The coefficient is validated on construction so that every reallocation
/// produces room for at least one more element:
///
/// - `Additive` needs a finite coefficient `> 0`
/// - `Multiplicative` needs a finite coefficient `> 1`
/// - neither accepts a coefficient above [`MAX_COEFFICIENT`]
///
/// The coefficient is applied as the decimal it was written as, to seven
/// significant digits: `multiplicative(1.2)` maps 5 elements to 6 slots even
/// though `1.2f32` is slightly above 1.2 in binary.
///
/// ```
/// # use growstack::{GrowthPolicy, ResizeStrategy};
/// let policy = GrowthPolicy::default();
/// assert_eq!(policy.strategy(), ResizeStrategy::Multiplicative);
/// assert_eq!(policy.capacity_for(4), 6);
///
/// let additive = GrowthPolicy::additive(2.5).unwrap();
/// assert_eq!(additive.capacity_for(4), 7);
///
/// assert!(GrowthPolicy::multiplicative(1.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GrowthPolicy {
    strategy: ResizeStrategy,
    coefficient: f32,
}

impl GrowthPolicy {
    /// Creates a policy after checking that `coefficient` makes the buffer grow.
    ///
    /// # Errors
    ///
    /// Returns `ContainerError::InvalidGrowthPolicy` if the coefficient is not
    /// finite or is too small for the chosen strategy.
    pub fn new(strategy: ResizeStrategy, coefficient: f32) -> Result<Self, ContainerError> {
        if !coefficient.is_finite() {
            return Err(ContainerError::InvalidGrowthPolicy {
                coefficient,
                reason: "must be finite",
            });
        }
        if coefficient > MAX_COEFFICIENT {
            return Err(ContainerError::InvalidGrowthPolicy {
                coefficient,
                reason: "must not exceed 1048576",
            });
        }
        match strategy {
            ResizeStrategy::Additive if coefficient <= 0.0 => {
                Err(ContainerError::InvalidGrowthPolicy {
                    coefficient,
                    reason: "must be greater than 0 for additive growth",
                })
            }
            ResizeStrategy::Multiplicative if coefficient <= 1.0 => {
                Err(ContainerError::InvalidGrowthPolicy {
                    coefficient,
                    reason: "must be greater than 1 for multiplicative growth",
                })
            }
            _ => Ok(Self {
                strategy,
                coefficient,
            }),
        }
    }

    /// Shorthand for `GrowthPolicy::new(ResizeStrategy::Additive, coefficient)`.
    ///
    /// # Errors
    ///
    /// See [`GrowthPolicy::new`].
    pub fn additive(coefficient: f32) -> Result<Self, ContainerError> {
        Self::new(ResizeStrategy::Additive, coefficient)
    }

    /// Shorthand for `GrowthPolicy::new(ResizeStrategy::Multiplicative, coefficient)`.
    ///
    /// # Errors
    ///
    /// See [`GrowthPolicy::new`].
    pub fn multiplicative(coefficient: f32) -> Result<Self, ContainerError> {
        Self::new(ResizeStrategy::Multiplicative, coefficient)
    }

    #[must_use]
    pub fn strategy(&self) -> ResizeStrategy {
        self.strategy
    }

    #[must_use]
    pub fn coefficient(&self) -> f32 {
        self.coefficient
    }

    /// Capacity to allocate for a buffer holding `len` elements.
    ///
    /// An empty buffer always gets a single slot. Otherwise the result is
    /// always at least `len + 1` and saturates at `usize::MAX`.
    #[must_use]
    pub fn capacity_for(&self, len: usize) -> usize {
        if len == 0 {
            return 1;
        }
        let (units, scale) = decimal_parts(self.coefficient);
        let len_wide = len as u128;
        let scaled_target = match self.strategy {
            ResizeStrategy::Additive => len_wide * scale + units,
            ResizeStrategy::Multiplicative => len_wide * units,
        };
        let target = scaled_target.div_ceil(scale);
        usize::try_from(target)
            .unwrap_or(usize::MAX)
            .max(len.saturating_add(1))
    }
}

impl Default for GrowthPolicy {
    fn default() -> Self {
        Self {
            strategy: ResizeStrategy::Multiplicative,
            coefficient: DEFAULT_COEFFICIENT,
        }
    }
}

/// Splits a coefficient into `units / scale` with `scale` a power of ten.
///
/// `f32` holds about seven significant decimal digits, so the value is
/// rounded to seven significant digits and at most six decimals. `1.2f32`
/// becomes `1_200_000 / 1_000_000`.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
fn decimal_parts(coefficient: f32) -> (u128, u128) {
    let mut scale = MAX_DECIMAL_SCALE;
    let mut whole = coefficient as u64;
    while whole >= 10 && scale > 1 {
        whole /= 10;
        scale /= 10;
    }
    // coefficient is positive and at most MAX_COEFFICIENT, so this fits
    let units = (f64::from(coefficient) * scale as f64 + 0.5) as u64;
    (u128::from(units), u128::from(scale))
}
