//! The physical parameter set shared by all kernel sweeps.

use crate::error::ParamError;

/// Physical and numerical parameters of the flow problem.
///
/// One value set covers a whole run: the momentum predictor, the
/// temperature transport, and the step-size selector all read from the same
/// struct. Fields are public; a driver builds the set once from its
/// configuration and calls [`validate`](Self::validate) before the first
/// step. The kernel itself assumes a validated set (degenerate values are a
/// configuration error, not a runtime state).
///
/// # Examples
///
/// ```
/// use convect_core::FluidParams;
///
/// let params = FluidParams {
///     re: 100.0,
///     pr: 7.0,
///     gx: 0.0,
///     gy: -9.81,
///     upwind: 0.9,
///     beta: 2.1e-4,
///     tau: 0.5,
/// };
/// assert!(params.validate().is_ok());
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FluidParams {
    /// Reynolds number. Divides the momentum diffusion term; must be
    /// finite and non-zero.
    pub re: f64,
    /// Prandtl number. Scales thermal diffusivity as `1/(re * pr)`; must
    /// be finite and positive.
    pub pr: f64,
    /// Body-force acceleration along x (buoyancy direction component).
    pub gx: f64,
    /// Body-force acceleration along y.
    pub gy: f64,
    /// Donor-cell blend factor in `[0, 1]`: `0` is pure central
    /// differencing, `1` full upwinding.
    pub upwind: f64,
    /// Thermal expansion coefficient of the Boussinesq buoyancy term
    /// `(1 - beta * T) * g`.
    pub beta: f64,
    /// Safety factor in `(0, 1]` applied to the stability-limited step.
    pub tau: f64,
}

impl FluidParams {
    /// Check the parameter set against the kernel's preconditions.
    ///
    /// Returns the first violation found. Call this once at configuration
    /// time; the sweeps do not re-check.
    pub fn validate(&self) -> Result<(), ParamError> {
        if !self.re.is_finite() || self.re == 0.0 {
            return Err(ParamError::InvalidReynolds { value: self.re });
        }
        if !self.pr.is_finite() || self.pr <= 0.0 {
            return Err(ParamError::InvalidPrandtl { value: self.pr });
        }
        if !self.upwind.is_finite() || !(0.0..=1.0).contains(&self.upwind) {
            return Err(ParamError::InvalidUpwind { value: self.upwind });
        }
        if !self.tau.is_finite() || self.tau <= 0.0 || self.tau > 1.0 {
            return Err(ParamError::InvalidSafetyFactor { value: self.tau });
        }
        for (name, value) in [("gx", self.gx), ("gy", self.gy), ("beta", self.beta)] {
            if !value.is_finite() {
                return Err(ParamError::NonFiniteForcing { name, value });
            }
        }
        Ok(())
    }
}
