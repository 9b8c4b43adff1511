//! Multiple-comparison p-value adjustment.
//!
//! Given the p-values from a family of hypothesis tests, [`adjust`] returns
//! p-values corrected for the inflated false-positive risk of testing many
//! hypotheses at once. The adjustment methods include the Bonferroni
//! correction, in which p-values are multiplied by the number of
//! comparisons, and the less conservative corrections of Holm (1979),
//! Hochberg (1988), Hommel (1988), Benjamini & Hochberg (1995), and
//! Benjamini & Yekutieli (2001), plus a pass-through for callers that
//! always route through the adjustment step.
//!
//! The first four methods give strong control of the family-wise error
//! rate. There is little reason to prefer the unmodified Bonferroni
//! correction, which is dominated by Holm's method under arbitrary
//! dependence. Hochberg's and Hommel's methods are valid when the tests are
//! independent or non-negatively associated; Hommel's is the more powerful
//! of the two but costs more to compute. The BH and BY methods control the
//! false discovery rate instead, a weaker guarantee that buys more power.
//!
//! The comparison count `n` may exceed the number of observed p-values, in
//! which case the unobserved comparisons are treated as maximally
//! unfavorable; they never improve an observed adjusted value.
//!
//! # References
//!
//! - Holm, S. (1979). A simple sequentially rejective multiple test
//!   procedure. Scandinavian Journal of Statistics, 6, 65-70.
//! - Hochberg, Y. (1988). A sharper Bonferroni procedure for multiple tests
//!   of significance. Biometrika, 75, 800-803.
//! - Hommel, G. (1988). A stagewise rejective multiple test procedure based
//!   on a modified Bonferroni test. Biometrika, 75, 383-386.
//! - Benjamini, Y., and Hochberg, Y. (1995). Controlling the false
//!   discovery rate. Journal of the Royal Statistical Society B, 57,
//!   289-300.
//! - Benjamini, Y., and Yekutieli, D. (2001). The control of the false
//!   discovery rate in multiple testing under dependency. Annals of
//!   Statistics, 29, 1165-1188.
//! - Wright, S. P. (1992). Adjusted P-values for simultaneous inference.
//!   Biometrics, 48, 1005-1013.

pub mod adjust;

pub use adjust::engine::{adjust, adjust_nan, by_correction_factor};
pub use adjust::error::AdjustError;
pub use adjust::method::Method;
