//! Evaluation of a named set of photolysis rates.
//!
//! A [`RateSetEvaluator`] is bound once to a [`Mechanism`] and then evaluated
//! for any number of (time, location, atmosphere) samples. Binding resolves
//! every name, so evaluation itself never fails.

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::atmosphere::{AtmosphericSample, Location};
use crate::context::PhotolysisContext;
use crate::error::{PhotolysisError, PhotolysisResult};
use crate::kernel::{Calibration, PhotolysisKernel};
use crate::solar;
use crate::spectra::{Channel, CrossSection};

/// Extra stand-in rate defined by a mechanism.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AliasSpec {
    pub name: String,
    pub source: String,
}

/// The rates a chemical mechanism needs and how to adjust them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Mechanism {
    /// Requested rate names. Empty selects every registered rate.
    pub rates: Vec<String>,
    /// Stand-ins resolved against registered rates or earlier aliases.
    pub aliases: Vec<AliasSpec>,
    /// Multiplicative factors keyed by rate name.
    pub calibration: BTreeMap<String, f64>,
}

/// Index of a rate within the sets produced by one evaluator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RateId(usize);

/// j-values (s⁻¹) for one sample, in the evaluator's rate order.
#[derive(Debug, Clone, PartialEq)]
pub struct RateSet {
    names: Arc<[String]>,
    index: Arc<HashMap<String, usize>>,
    values: Vec<f64>,
}

impl RateSet {
    pub fn get(&self, rate: &str) -> Option<f64> {
        self.index.get(rate).map(|&idx| self.values[idx])
    }

    /// Value of a rate bound with [`RateSetEvaluator::rate_id`].
    pub fn value(&self, id: RateId) -> f64 {
        self.values[id.0]
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.names
            .iter()
            .map(String::as_str)
            .zip(self.values.iter().copied())
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn to_map(&self) -> BTreeMap<String, f64> {
        self.iter()
            .map(|(name, value)| (name.to_string(), value))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Channels that read the same cross-section table.
#[derive(Debug, Clone)]
struct KernelGroup {
    cross_section: Arc<CrossSection>,
    members: Vec<(usize, PhotolysisKernel)>,
}

#[derive(Debug, Clone)]
pub struct RateSetEvaluator {
    context: Arc<PhotolysisContext>,
    names: Arc<[String]>,
    index: Arc<HashMap<String, usize>>,
    groups: Vec<KernelGroup>,
}

impl RateSetEvaluator {
    pub fn new(context: Arc<PhotolysisContext>, mechanism: &Mechanism) -> PhotolysisResult<Self> {
        let store = context.spectra();

        let mut aliases: Vec<Channel> = Vec::with_capacity(mechanism.aliases.len());
        for spec in &mechanism.aliases {
            if store.contains(&spec.name) || aliases.iter().any(|a| a.rate() == spec.name) {
                return Err(PhotolysisError::DuplicateRate(spec.name.clone()));
            }
            let channel = match aliases.iter().find(|a| a.rate() == spec.source) {
                Some(earlier) => Channel {
                    rate: spec.name.clone(),
                    ..earlier.clone()
                },
                None => store.alias_channel(&spec.name, &spec.source)?,
            };
            aliases.push(channel);
        }

        let selected: Vec<String> = if mechanism.rates.is_empty() {
            store
                .rate_names()
                .into_iter()
                .map(str::to_string)
                .chain(aliases.iter().map(|a| a.rate.clone()))
                .collect()
        } else {
            // Mechanism aliases are always published, after the requested rates
            let mut selected = mechanism.rates.clone();
            for alias in &aliases {
                if !selected.contains(&alias.rate) {
                    selected.push(alias.rate.clone());
                }
            }
            selected
        };

        let mut index = HashMap::with_capacity(selected.len());
        let mut kernels = Vec::with_capacity(selected.len());
        for (idx, name) in selected.iter().enumerate() {
            if index.insert(name.clone(), idx).is_some() {
                return Err(PhotolysisError::DuplicateRate(name.clone()));
            }
            let channel = match aliases.iter().find(|a| &a.rate == name) {
                Some(alias) => alias,
                None => store.get(name)?,
            };
            kernels.push(PhotolysisKernel::from_channel(channel));
        }

        for (rate, &factor) in &mechanism.calibration {
            let idx = *index
                .get(rate)
                .ok_or_else(|| PhotolysisError::UnknownRate(rate.clone()))?;
            let calibration = Calibration::new(rate, factor)?;
            if factor == 0.0 {
                warn!("Calibration factor for {rate} is 0, the rate will always be zero");
            }
            kernels[idx] = kernels[idx].clone().with_calibration(calibration);
        }

        let mut groups: Vec<KernelGroup> = Vec::new();
        for (idx, kernel) in kernels.into_iter().enumerate() {
            match groups
                .iter_mut()
                .find(|g| Arc::ptr_eq(&g.cross_section, kernel.cross_section()))
            {
                Some(group) => group.members.push((idx, kernel)),
                None => groups.push(KernelGroup {
                    cross_section: Arc::clone(kernel.cross_section()),
                    members: vec![(idx, kernel)],
                }),
            }
        }

        info!(
            "Built photolysis evaluator: {} rates over {} cross sections",
            selected.len(),
            groups.len()
        );

        Ok(Self {
            context,
            names: selected.into(),
            index: Arc::new(index),
            groups,
        })
    }

    /// Evaluator for every registered rate, uncalibrated.
    pub fn all(context: Arc<PhotolysisContext>) -> PhotolysisResult<Self> {
        Self::new(context, &Mechanism::default())
    }

    pub fn context(&self) -> &Arc<PhotolysisContext> {
        &self.context
    }

    pub fn rate_id(&self, rate: &str) -> PhotolysisResult<RateId> {
        self.index
            .get(rate)
            .map(|&idx| RateId(idx))
            .ok_or_else(|| PhotolysisError::UnknownRate(rate.to_string()))
    }

    pub fn rate_names(&self) -> &[String] {
        &self.names
    }

    /// Output buffer for [`evaluate_into`](Self::evaluate_into), all zeros.
    pub fn new_rate_set(&self) -> RateSet {
        RateSet {
            names: Arc::clone(&self.names),
            index: Arc::clone(&self.index),
            values: vec![0.0; self.names.len()],
        }
    }

    /// j-values at `time` (seconds since the Unix epoch) and `location`.
    pub fn evaluate(&self, time: f64, location: &Location, sample: &AtmosphericSample) -> RateSet {
        let mut out = self.new_rate_set();
        self.evaluate_into(time, location, sample, &mut out);
        out
    }

    /// Same as [`evaluate`](Self::evaluate), writing into an existing set.
    ///
    /// Does not allocate when `out` came from this evaluator.
    pub fn evaluate_into(
        &self,
        time: f64,
        location: &Location,
        sample: &AtmosphericSample,
        out: &mut RateSet,
    ) {
        let cos_zenith = solar::cos_zenith(time, location.latitude(), location.longitude());
        self.evaluate_with_cos_zenith_into(cos_zenith, sample, out);
    }

    /// j-values for a prescribed solar zenith angle.
    pub fn evaluate_with_cos_zenith(&self, cos_zenith: f64, sample: &AtmosphericSample) -> RateSet {
        let mut out = self.new_rate_set();
        self.evaluate_with_cos_zenith_into(cos_zenith, sample, &mut out);
        out
    }

    pub fn evaluate_with_cos_zenith_into(
        &self,
        cos_zenith: f64,
        sample: &AtmosphericSample,
        out: &mut RateSet,
    ) {
        if !Arc::ptr_eq(&out.names, &self.names) {
            *out = self.new_rate_set();
        }

        let flux = self
            .context
            .flux_table()
            .flux_vector(cos_zenith, sample.pressure);

        for group in &self.groups {
            let sigma = group.cross_section.at(sample.temperature);
            for (idx, kernel) in &group.members {
                out.values[*idx] = kernel.rate_from_cross_section(&sigma, &flux);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn context() -> Arc<PhotolysisContext> {
        PhotolysisContext::shared().unwrap()
    }

    fn mechanism(rates: &[&str]) -> Mechanism {
        Mechanism {
            rates: rates.iter().map(|r| r.to_string()).collect(),
            ..Default::default()
        }
    }

    #[test]
    fn test_requested_order_is_kept() {
        let evaluator =
            RateSetEvaluator::new(context(), &mechanism(&["j_NO2", "j_O3_O1D", "j_H2O2"])).unwrap();

        assert_eq!(evaluator.rate_names(), ["j_NO2", "j_O3_O1D", "j_H2O2"]);
        assert_eq!(evaluator.rate_id("j_O3_O1D").unwrap(), RateId(1));
        assert!(evaluator.rate_id("j_O2").is_err());
    }

    #[test]
    fn test_empty_request_selects_everything() {
        let ctx = context();
        let evaluator = RateSetEvaluator::all(Arc::clone(&ctx)).unwrap();
        assert_eq!(evaluator.rate_names().len(), ctx.spectra().len());
    }

    #[test]
    fn test_unknown_and_duplicate_rates() {
        assert!(matches!(
            RateSetEvaluator::new(context(), &mechanism(&["j_NO2", "j_XYZ"])),
            Err(PhotolysisError::UnknownRate(name)) if name == "j_XYZ"
        ));
        assert!(matches!(
            RateSetEvaluator::new(context(), &mechanism(&["j_NO2", "j_NO2"])),
            Err(PhotolysisError::DuplicateRate(_))
        ));
    }

    #[test]
    fn test_branches_are_grouped() {
        let evaluator = RateSetEvaluator::new(
            context(),
            &mechanism(&["j_O3_O1D", "j_NO2", "j_O3_O3P", "j_C2H5OOH", "j_CH3OOH"]),
        )
        .unwrap();

        assert_eq!(evaluator.groups.len(), 3);
    }

    #[test]
    fn test_mechanism_aliases() {
        let mech = Mechanism {
            rates: vec!["j_CH3OOH".to_string()],
            aliases: vec![
                AliasSpec {
                    name: "j_ISOPOOH".to_string(),
                    source: "j_CH3OOH".to_string(),
                },
                AliasSpec {
                    name: "j_MVKOOH".to_string(),
                    source: "j_ISOPOOH".to_string(),
                },
            ],
            ..Default::default()
        };
        let evaluator = RateSetEvaluator::new(context(), &mech).unwrap();
        let rates = evaluator.evaluate_with_cos_zenith(0.7, &AtmosphericSample::default());

        assert_eq!(rates.len(), 3);
        assert_eq!(rates.get("j_ISOPOOH"), rates.get("j_CH3OOH"));
        assert_eq!(rates.get("j_MVKOOH"), rates.get("j_CH3OOH"));

        let clash = Mechanism {
            aliases: vec![AliasSpec {
                name: "j_NO2".to_string(),
                source: "j_O2".to_string(),
            }],
            ..Default::default()
        };
        assert!(matches!(
            RateSetEvaluator::new(context(), &clash),
            Err(PhotolysisError::DuplicateRate(_))
        ));

        let missing = Mechanism {
            aliases: vec![AliasSpec {
                name: "j_X".to_string(),
                source: "j_Y".to_string(),
            }],
            ..Default::default()
        };
        assert!(RateSetEvaluator::new(context(), &missing).is_err());
    }

    #[test]
    fn test_calibration() {
        let sample = AtmosphericSample::default();
        let plain = RateSetEvaluator::new(context(), &mechanism(&["j_NO2"])).unwrap();

        let mut mech = mechanism(&["j_NO2"]);
        mech.calibration.insert("j_NO2".to_string(), 2.0);
        let scaled = RateSetEvaluator::new(context(), &mech).unwrap();

        let raw = plain.evaluate_with_cos_zenith(0.8, &sample).get("j_NO2").unwrap();
        let calibrated = scaled.evaluate_with_cos_zenith(0.8, &sample).get("j_NO2").unwrap();
        assert_eq!(calibrated, 2.0 * raw);

        mech.calibration.insert("j_NO2".to_string(), -1.0);
        assert!(matches!(
            RateSetEvaluator::new(context(), &mech),
            Err(PhotolysisError::InvalidCalibration { .. })
        ));

        let mut unknown = mechanism(&["j_NO2"]);
        unknown.calibration.insert("j_O2".to_string(), 1.0);
        assert!(matches!(
            RateSetEvaluator::new(context(), &unknown),
            Err(PhotolysisError::UnknownRate(_))
        ));
    }

    #[test]
    fn test_grouped_evaluation_matches_kernels() {
        let ctx = context();
        let evaluator = RateSetEvaluator::all(Arc::clone(&ctx)).unwrap();
        let sample = AtmosphericSample::new(50000.0, 235.0, 0.0);
        let rates = evaluator.evaluate_with_cos_zenith(0.6, &sample);
        let flux = ctx.flux_table().flux_vector(0.6, 50000.0);

        for (name, value) in rates.iter() {
            let channel = ctx.spectra().get(name).unwrap();
            let direct = PhotolysisKernel::from_channel(channel).j_rate(235.0, &flux);
            assert_eq!(value, direct, "{name}");
        }
    }

    #[test]
    fn test_night_rates() {
        let evaluator = RateSetEvaluator::all(context()).unwrap();
        let rates = evaluator.evaluate_with_cos_zenith(-0.5, &AtmosphericSample::default());
        assert!(rates.iter().all(|(_, value)| value == 0.0));
    }

    #[test]
    fn test_evaluate_into_reuses_buffer() {
        let evaluator = RateSetEvaluator::new(context(), &mechanism(&["j_NO2"])).unwrap();
        let location = Location::from_degrees(30.0, 0.0).unwrap();
        let sample = AtmosphericSample::default();

        let mut out = evaluator.new_rate_set();
        evaluator.evaluate_into(43200.0, &location, &sample, &mut out);
        assert_eq!(out, evaluator.evaluate(43200.0, &location, &sample));

        let id = evaluator.rate_id("j_NO2").unwrap();
        assert_eq!(Some(out.value(id)), out.get("j_NO2"));
        assert_eq!(out.to_map().len(), 1);
    }

    #[test]
    fn test_foreign_rate_set_is_replaced() {
        let first = RateSetEvaluator::new(context(), &mechanism(&["j_NO2"])).unwrap();
        let second = RateSetEvaluator::new(context(), &mechanism(&["j_O2", "j_NO2"])).unwrap();

        let mut out = first.new_rate_set();
        second.evaluate_with_cos_zenith_into(0.5, &AtmosphericSample::default(), &mut out);
        assert_eq!(out.len(), 2);
        assert!(out.get("j_O2").is_some());
    }

    #[test]
    fn test_mechanism_from_json() {
        let mech: Mechanism = serde_json::from_str(
            r#"{"rates": ["j_NO2"], "calibration": {"j_NO2": 0.9}}"#,
        )
        .unwrap();
        assert_eq!(mech.rates, ["j_NO2"]);
        assert!(mech.aliases.is_empty());
        assert_eq!(mech.calibration["j_NO2"], 0.9);
    }

    #[test]
    fn test_evaluator_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<RateSetEvaluator>();
        assert_send_sync::<RateSet>();
    }
}
