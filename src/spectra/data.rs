//! Built-in 18-bin cross sections (cm²) and quantum yields.
//!
//! Each entry is an effective, bin-averaged value. Temperature-dependent
//! species carry one row per tabulated temperature (K), in increasing order.

use super::spectrum::{BuiltinCrossSection, BuiltinSpecies};
use crate::bins::NBINS;

const UNIT_YIELD: [f64; NBINS] = [1.0; NBINS];

const O2_CROSS_SECTION: [f64; NBINS] = [
    1.1e-21, 6.0e-22, 4.0e-22, 2.5e-22, 1.0e-22, 1.0e-23, 7.0e-24, 6.0e-24, 0.0, 0.0, 0.0, 0.0,
    0.0, 0.0, 0.0, 0.0, 0.0, 0.0,
];

const O3_TEMPERATURES: [f64; 3] = [218.0, 258.0, 298.0];

const O3_CROSS_SECTIONS: [[f64; NBINS]; 3] = [
    [
        6.5e-19, 5.8e-19, 5.4e-19, 4.9e-19, 4.1e-19, 3.5e-19, 3.4e-19, 3.6e-19, 9.4e-18,
        8.8e-18, 6.3e-18, 1.5e-18, 4.6e-19, 1.75e-19, 6.8e-20, 6.5e-21, 3.0e-23, 4.7e-21,
    ],
    [
        6.5e-19, 5.8e-19, 5.4e-19, 4.9e-19, 4.1e-19, 3.5e-19, 3.4e-19, 3.6e-19, 9.4e-18,
        8.8e-18, 6.3e-18, 1.55e-18, 4.9e-19, 1.9e-19, 7.5e-20, 7.4e-21, 3.2e-23, 4.7e-21,
    ],
    [
        6.5e-19, 5.8e-19, 5.4e-19, 4.9e-19, 4.1e-19, 3.5e-19, 3.4e-19, 3.6e-19, 9.4e-18,
        8.8e-18, 6.3e-18, 1.62e-18, 5.3e-19, 2.1e-19, 8.4e-20, 8.6e-21, 3.5e-23, 4.7e-21,
    ],
];

const O3_O1D_YIELD: [f64; NBINS] = [
    0.48, 0.48, 0.48, 0.48, 0.48, 0.48, 0.48, 0.48, 0.9, 0.9, 0.9, 0.9, 0.9, 0.75, 0.28, 0.08,
    0.0, 0.0,
];

const O3_O3P_YIELD: [f64; NBINS] = [
    0.52, 0.52, 0.52, 0.52, 0.52, 0.52, 0.52, 0.52, 0.1, 0.1, 0.1, 0.1, 0.1, 0.25, 0.72, 0.92,
    1.0, 1.0,
];

const NO2_TEMPERATURES: [f64; 2] = [200.0, 294.0];

const NO2_CROSS_SECTIONS: [[f64; NBINS]; 2] = [
    [
        4.2e-19, 4.0e-19, 3.9e-19, 3.7e-19, 3.0e-19, 2.4e-19, 2.1e-19, 1.8e-19, 5.0e-20,
        3.2e-20, 2.3e-20, 8.5e-20, 1.25e-19, 1.55e-19, 1.9e-19, 2.9e-19, 5.1e-19, 6.0e-21,
    ],
    [
        4.2e-19, 4.0e-19, 3.9e-19, 3.7e-19, 3.0e-19, 2.4e-19, 2.1e-19, 1.8e-19, 5.5e-20,
        3.5e-20, 2.5e-20, 9.0e-20, 1.3e-19, 1.6e-19, 2.0e-19, 3.0e-19, 5.3e-19, 6.5e-21,
    ],
];

const NO2_YIELD: [f64; NBINS] = [
    1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 0.05,
];

const H2O2_TEMPERATURES: [f64; 2] = [200.0, 300.0];

const H2O2_CROSS_SECTIONS: [[f64; NBINS]; 2] = [
    [
        3.6e-19, 3.3e-19, 3.1e-19, 2.9e-19, 2.5e-19, 2.0e-19, 1.8e-19, 1.6e-19, 4.3e-20,
        3.5e-20, 2.5e-20, 1.03e-20, 7.0e-21, 5.1e-21, 3.6e-21, 1.5e-21, 2.0e-22, 0.0,
    ],
    [
        3.6e-19, 3.3e-19, 3.1e-19, 2.9e-19, 2.5e-19, 2.0e-19, 1.8e-19, 1.6e-19, 4.5e-20,
        3.7e-20, 2.7e-20, 1.15e-20, 8.0e-21, 5.9e-21, 4.3e-21, 1.9e-21, 2.8e-22, 0.0,
    ],
];

const CH3OOH_CROSS_SECTION: [f64; NBINS] = [
    3.7e-19, 3.5e-19, 3.3e-19, 3.0e-19, 2.4e-19, 1.7e-19, 1.5e-19, 1.3e-19, 1.9e-20, 1.6e-20,
    1.2e-20, 5.5e-21, 3.9e-21, 2.9e-21, 2.1e-21, 9.0e-22, 1.2e-22, 0.0,
];

const CH2O_TEMPERATURES: [f64; 2] = [223.0, 298.0];

const CH2O_CROSS_SECTIONS: [[f64; NBINS]; 2] = [
    [
        2.0e-21, 2.0e-21, 2.0e-21, 2.0e-21, 1.5e-21, 1.0e-21, 8.0e-22, 6.0e-22, 1.0e-22,
        3.0e-22, 1.0e-21, 9.0e-21, 1.6e-20, 2.1e-20, 1.9e-20, 2.0e-20, 1.1e-21, 0.0,
    ],
    [
        2.0e-21, 2.0e-21, 2.0e-21, 2.0e-21, 1.5e-21, 1.0e-21, 8.0e-22, 6.0e-22, 1.0e-22,
        3.0e-22, 1.0e-21, 9.5e-21, 1.65e-20, 2.2e-20, 2.0e-20, 2.1e-20, 1.2e-21, 0.0,
    ],
];

const CH2OA_YIELD: [f64; NBINS] = [
    0.3, 0.3, 0.3, 0.3, 0.3, 0.3, 0.3, 0.3, 0.3, 0.3, 0.32, 0.7, 0.75, 0.75, 0.7, 0.45, 0.0,
    0.0,
];

const CH2OB_YIELD: [f64; NBINS] = [
    0.5, 0.5, 0.5, 0.5, 0.5, 0.5, 0.5, 0.5, 0.5, 0.5, 0.5, 0.25, 0.24, 0.24, 0.28, 0.53, 0.35,
    0.0,
];

const NO3_CROSS_SECTION: [f64; NBINS] = [
    5.0e-20, 5.0e-20, 5.0e-20, 5.0e-20, 5.0e-20, 5.0e-20, 5.0e-20, 5.0e-20, 2.0e-20, 2.0e-20,
    2.0e-20, 1.5e-20, 1.5e-20, 1.5e-20, 1.5e-20, 2.0e-20, 3.0e-20, 1.2e-18,
];

const NO3A_YIELD: [f64; NBINS] = [
    1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 0.89,
];

const NO3B_YIELD: [f64; NBINS] = [
    0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.11,
];

const N2O5_TEMPERATURES: [f64; 2] = [230.0, 300.0];

const N2O5_CROSS_SECTIONS: [[f64; NBINS]; 2] = [
    [
        5.0e-18, 4.2e-18, 3.8e-18, 3.2e-18, 2.2e-18, 1.5e-18, 1.2e-18, 9.5e-19, 3.0e-19,
        2.4e-19, 1.6e-19, 5.5e-20, 3.5e-20, 2.3e-20, 1.6e-20, 6.0e-21, 6.0e-22, 0.0,
    ],
    [
        5.0e-18, 4.2e-18, 3.8e-18, 3.2e-18, 2.2e-18, 1.5e-18, 1.2e-18, 9.5e-19, 3.0e-19,
        2.4e-19, 1.7e-19, 6.2e-20, 4.1e-20, 2.8e-20, 2.0e-20, 8.0e-21, 9.0e-22, 0.0,
    ],
];

const HNO2_CROSS_SECTION: [f64; NBINS] = [
    0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0e-20, 8.0e-21, 4.0e-21, 2.0e-21, 2.0e-21,
    5.0e-21, 1.2e-20, 5.6e-20, 1.8e-19, 0.0,
];

const HNO3_TEMPERATURES: [f64; 2] = [200.0, 300.0];

const HNO3_CROSS_SECTIONS: [[f64; NBINS]; 2] = [
    [
        1.2e-17, 1.0e-17, 9.0e-18, 7.5e-18, 5.5e-18, 4.0e-18, 3.3e-18, 2.5e-18, 2.0e-20,
        1.7e-20, 1.2e-20, 3.8e-21, 1.7e-21, 7.5e-22, 3.0e-22, 4.0e-23, 0.0, 0.0,
    ],
    [
        1.2e-17, 1.0e-17, 9.0e-18, 7.5e-18, 5.5e-18, 4.0e-18, 3.3e-18, 2.5e-18, 2.1e-20,
        1.8e-20, 1.3e-20, 4.3e-21, 2.1e-21, 1.0e-21, 4.3e-22, 6.5e-23, 0.0, 0.0,
    ],
];

const HNO4_CROSS_SECTION: [f64; NBINS] = [
    1.0e-18, 9.0e-19, 8.5e-19, 8.0e-19, 6.5e-19, 5.0e-19, 4.3e-19, 3.6e-19, 8.0e-20, 6.5e-20,
    4.0e-20, 8.0e-21, 5.0e-21, 3.0e-21, 1.8e-21, 5.0e-22, 0.0, 0.0,
];

const N2O_CROSS_SECTION: [f64; NBINS] = [
    1.4e-19, 1.1e-19, 9.0e-20, 6.5e-20, 3.0e-20, 1.0e-20, 5.5e-21, 3.0e-21, 0.0, 0.0, 0.0, 0.0,
    0.0, 0.0, 0.0, 0.0, 0.0, 0.0,
];

const CLNO3_CROSS_SECTION: [f64; NBINS] = [
    5.0e-18, 4.5e-18, 4.2e-18, 3.8e-18, 3.0e-18, 2.0e-18, 1.6e-18, 1.2e-18, 1.7e-19, 1.3e-19,
    8.0e-20, 2.0e-20, 1.2e-20, 7.5e-21, 5.0e-21, 2.0e-21, 3.0e-22, 0.0,
];

const CLNO3A_YIELD: [f64; NBINS] = [
    0.6, 0.6, 0.6, 0.6, 0.6, 0.6, 0.6, 0.6, 0.6, 0.6, 0.6, 0.6, 0.6, 0.6, 0.6, 0.6, 0.6, 0.6,
];

const CLNO3B_YIELD: [f64; NBINS] = [
    0.4, 0.4, 0.4, 0.4, 0.4, 0.4, 0.4, 0.4, 0.4, 0.4, 0.4, 0.4, 0.4, 0.4, 0.4, 0.4, 0.4, 0.4,
];

const CL2_CROSS_SECTION: [f64; NBINS] = [
    0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0e-21, 3.0e-20, 6.5e-20, 9.5e-20,
    1.3e-19, 2.2e-19, 1.6e-19, 2.0e-21,
];

const HOCL_CROSS_SECTION: [f64; NBINS] = [
    6.0e-20, 6.0e-20, 6.0e-20, 6.0e-20, 6.0e-20, 6.0e-20, 6.0e-20, 6.0e-20, 6.0e-20, 5.0e-20,
    5.5e-20, 5.5e-20, 5.0e-20, 4.5e-20, 4.0e-20, 2.8e-20, 7.0e-21, 0.0,
];

const OCLO_CROSS_SECTION: [f64; NBINS] = [
    0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0e-20, 2.0e-20, 6.0e-20, 3.0e-19, 5.0e-19,
    8.0e-19, 1.5e-18, 4.0e-18, 6.0e-18, 1.0e-19,
];

const CL2O2_CROSS_SECTION: [f64; NBINS] = [
    3.0e-18, 3.1e-18, 3.2e-18, 3.3e-18, 3.5e-18, 3.8e-18, 4.0e-18, 4.3e-18, 5.5e-18, 5.0e-18,
    4.2e-18, 1.5e-18, 9.0e-19, 6.0e-19, 4.5e-19, 2.5e-19, 6.0e-20, 1.5e-21,
];

const BRO_CROSS_SECTION: [f64; NBINS] = [
    0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 5.0e-19, 7.0e-19, 1.0e-18, 2.0e-18, 3.0e-18,
    4.5e-18, 5.5e-18, 7.5e-18, 1.5e-18, 0.0,
];

const BRNO3_CROSS_SECTION: [f64; NBINS] = [
    1.0e-17, 9.0e-18, 8.5e-18, 7.5e-18, 6.0e-18, 4.5e-18, 3.8e-18, 3.2e-18, 1.0e-18, 8.5e-19,
    6.0e-19, 2.5e-19, 1.8e-19, 1.3e-19, 1.0e-19, 5.5e-20, 1.8e-20, 1.0e-21,
];

const BRNO3A_YIELD: [f64; NBINS] = [
    0.85, 0.85, 0.85, 0.85, 0.85, 0.85, 0.85, 0.85, 0.85, 0.85, 0.85, 0.85, 0.85, 0.85, 0.85,
    0.85, 0.85, 0.85,
];

const BRNO3B_YIELD: [f64; NBINS] = [
    0.15, 0.15, 0.15, 0.15, 0.15, 0.15, 0.15, 0.15, 0.15, 0.15, 0.15, 0.15, 0.15, 0.15, 0.15,
    0.15, 0.15, 0.15,
];

const HOBR_CROSS_SECTION: [f64; NBINS] = [
    0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 2.0e-19, 2.5e-19, 2.8e-19, 1.5e-19, 9.0e-20,
    6.5e-20, 7.0e-20, 1.2e-19, 3.0e-20, 0.0,
];

const BRCL_CROSS_SECTION: [f64; NBINS] = [
    0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0e-21, 2.0e-21, 8.0e-21, 3.0e-20, 5.0e-20,
    7.0e-20, 9.0e-20, 1.4e-19, 3.0e-19, 2.5e-20,
];

const CH3CHO_CROSS_SECTION: [f64; NBINS] = [
    1.0e-21, 1.0e-21, 1.0e-21, 1.0e-21, 1.0e-21, 1.0e-21, 1.0e-21, 1.0e-21, 5.0e-21, 1.0e-20,
    2.6e-20, 4.4e-20, 4.0e-20, 3.0e-20, 2.3e-20, 6.0e-21, 0.0, 0.0,
];

const CH3CHO_YIELD: [f64; NBINS] = [
    0.3, 0.3, 0.3, 0.3, 0.3, 0.3, 0.3, 0.3, 0.3, 0.35, 0.45, 0.5, 0.35, 0.25, 0.15, 0.05, 0.0,
    0.0,
];

const CH3COCH3_CROSS_SECTION: [f64; NBINS] = [
    2.0e-21, 2.0e-21, 2.0e-21, 2.0e-21, 2.0e-21, 2.0e-21, 2.0e-21, 2.0e-21, 1.5e-20, 2.5e-20,
    4.3e-20, 4.0e-20, 3.3e-20, 2.2e-20, 1.3e-20, 2.5e-21, 0.0, 0.0,
];

const CH3COCH3_YIELD: [f64; NBINS] = [
    0.9, 0.9, 0.9, 0.9, 0.9, 0.9, 0.9, 0.9, 0.9, 0.85, 0.7, 0.35, 0.2, 0.12, 0.08, 0.03, 0.0,
    0.0,
];

const MGLY_CROSS_SECTION: [f64; NBINS] = [
    5.0e-20, 5.0e-20, 5.0e-20, 5.0e-20, 5.0e-20, 5.0e-20, 5.0e-20, 5.0e-20, 2.5e-20, 3.0e-20,
    3.5e-20, 2.5e-20, 2.0e-20, 1.5e-20, 1.2e-20, 8.0e-21, 2.0e-20, 3.0e-20,
];

const MGLY_YIELD: [f64; NBINS] = [
    0.9, 0.9, 0.9, 0.9, 0.9, 0.9, 0.9, 0.9, 0.9, 0.9, 0.9, 0.6, 0.6, 0.5, 0.4, 0.3, 0.15, 0.1,
];

const PAN_CROSS_SECTION: [f64; NBINS] = [
    1.0e-17, 8.0e-18, 7.0e-18, 5.5e-18, 3.0e-18, 1.5e-18, 1.0e-18, 6.0e-19, 2.0e-20, 1.5e-20,
    1.0e-20, 6.0e-21, 2.7e-21, 1.4e-21, 7.5e-22, 1.0e-22, 0.0, 0.0,
];

const CFCL3_CROSS_SECTION: [f64; NBINS] = [
    3.1e-18, 2.7e-18, 2.4e-18, 1.9e-18, 8.5e-19, 3.0e-19, 1.7e-19, 9.5e-20, 0.0, 0.0, 0.0, 0.0,
    0.0, 0.0, 0.0, 0.0, 0.0, 0.0,
];

const CF2CL2_CROSS_SECTION: [f64; NBINS] = [
    1.5e-19, 9.0e-20, 6.5e-20, 3.8e-20, 1.2e-20, 3.5e-21, 1.7e-21, 8.5e-22, 0.0, 0.0, 0.0, 0.0,
    0.0, 0.0, 0.0, 0.0, 0.0, 0.0,
];

const CCL4_CROSS_SECTION: [f64; NBINS] = [
    1.0e-18, 9.5e-19, 9.0e-19, 8.0e-19, 6.5e-19, 4.0e-19, 3.0e-19, 2.2e-19, 0.0, 0.0, 0.0, 0.0,
    0.0, 0.0, 0.0, 0.0, 0.0, 0.0,
];

const CH3BR_CROSS_SECTION: [f64; NBINS] = [
    3.5e-19, 2.5e-19, 2.2e-19, 1.8e-19, 1.0e-19, 5.0e-20, 3.5e-20, 2.5e-20, 0.0, 0.0, 0.0, 0.0,
    0.0, 0.0, 0.0, 0.0, 0.0, 0.0,
];

const CH3CL_CROSS_SECTION: [f64; NBINS] = [
    1.0e-19, 6.0e-20, 4.5e-20, 3.0e-20, 1.2e-20, 4.0e-21, 2.5e-21, 1.5e-21, 0.0, 0.0, 0.0, 0.0,
    0.0, 0.0, 0.0, 0.0, 0.0, 0.0,
];

pub(crate) const BUILTIN_SPECIES: &[BuiltinSpecies] = &[
    BuiltinSpecies {
        species: "O2",
        cross_section: BuiltinCrossSection::Fixed(&O2_CROSS_SECTION),
        channels: &[("j_O2", &UNIT_YIELD)],
    },
    BuiltinSpecies {
        species: "O3",
        cross_section: BuiltinCrossSection::TemperatureDependent(&O3_TEMPERATURES, &O3_CROSS_SECTIONS),
        channels: &[("j_O3_O1D", &O3_O1D_YIELD), ("j_O3_O3P", &O3_O3P_YIELD)],
    },
    BuiltinSpecies {
        species: "NO2",
        cross_section: BuiltinCrossSection::TemperatureDependent(&NO2_TEMPERATURES, &NO2_CROSS_SECTIONS),
        channels: &[("j_NO2", &NO2_YIELD)],
    },
    BuiltinSpecies {
        species: "H2O2",
        cross_section: BuiltinCrossSection::TemperatureDependent(&H2O2_TEMPERATURES, &H2O2_CROSS_SECTIONS),
        channels: &[("j_H2O2", &UNIT_YIELD)],
    },
    BuiltinSpecies {
        species: "CH3OOH",
        cross_section: BuiltinCrossSection::Fixed(&CH3OOH_CROSS_SECTION),
        channels: &[("j_CH3OOH", &UNIT_YIELD)],
    },
    BuiltinSpecies {
        species: "CH2O",
        cross_section: BuiltinCrossSection::TemperatureDependent(&CH2O_TEMPERATURES, &CH2O_CROSS_SECTIONS),
        channels: &[("j_CH2Oa", &CH2OA_YIELD), ("j_CH2Ob", &CH2OB_YIELD)],
    },
    BuiltinSpecies {
        species: "NO3",
        cross_section: BuiltinCrossSection::Fixed(&NO3_CROSS_SECTION),
        channels: &[("j_NO3a", &NO3A_YIELD), ("j_NO3b", &NO3B_YIELD)],
    },
    BuiltinSpecies {
        species: "N2O5",
        cross_section: BuiltinCrossSection::TemperatureDependent(&N2O5_TEMPERATURES, &N2O5_CROSS_SECTIONS),
        channels: &[("j_N2O5", &UNIT_YIELD)],
    },
    BuiltinSpecies {
        species: "HNO2",
        cross_section: BuiltinCrossSection::Fixed(&HNO2_CROSS_SECTION),
        channels: &[("j_HNO2", &UNIT_YIELD)],
    },
    BuiltinSpecies {
        species: "HNO3",
        cross_section: BuiltinCrossSection::TemperatureDependent(&HNO3_TEMPERATURES, &HNO3_CROSS_SECTIONS),
        channels: &[("j_HNO3", &UNIT_YIELD)],
    },
    BuiltinSpecies {
        species: "HNO4",
        cross_section: BuiltinCrossSection::Fixed(&HNO4_CROSS_SECTION),
        channels: &[("j_HNO4", &UNIT_YIELD)],
    },
    BuiltinSpecies {
        species: "N2O",
        cross_section: BuiltinCrossSection::Fixed(&N2O_CROSS_SECTION),
        channels: &[("j_N2O", &UNIT_YIELD)],
    },
    BuiltinSpecies {
        species: "ClNO3",
        cross_section: BuiltinCrossSection::Fixed(&CLNO3_CROSS_SECTION),
        channels: &[("j_ClNO3a", &CLNO3A_YIELD), ("j_ClNO3b", &CLNO3B_YIELD)],
    },
    BuiltinSpecies {
        species: "Cl2",
        cross_section: BuiltinCrossSection::Fixed(&CL2_CROSS_SECTION),
        channels: &[("j_Cl2", &UNIT_YIELD)],
    },
    BuiltinSpecies {
        species: "HOCl",
        cross_section: BuiltinCrossSection::Fixed(&HOCL_CROSS_SECTION),
        channels: &[("j_HOCl", &UNIT_YIELD)],
    },
    BuiltinSpecies {
        species: "OClO",
        cross_section: BuiltinCrossSection::Fixed(&OCLO_CROSS_SECTION),
        channels: &[("j_OClO", &UNIT_YIELD)],
    },
    BuiltinSpecies {
        species: "Cl2O2",
        cross_section: BuiltinCrossSection::Fixed(&CL2O2_CROSS_SECTION),
        channels: &[("j_Cl2O2", &UNIT_YIELD)],
    },
    BuiltinSpecies {
        species: "BrO",
        cross_section: BuiltinCrossSection::Fixed(&BRO_CROSS_SECTION),
        channels: &[("j_BrO", &UNIT_YIELD)],
    },
    BuiltinSpecies {
        species: "BrNO3",
        cross_section: BuiltinCrossSection::Fixed(&BRNO3_CROSS_SECTION),
        channels: &[("j_BrNO3a", &BRNO3A_YIELD), ("j_BrNO3b", &BRNO3B_YIELD)],
    },
    BuiltinSpecies {
        species: "HOBr",
        cross_section: BuiltinCrossSection::Fixed(&HOBR_CROSS_SECTION),
        channels: &[("j_HOBr", &UNIT_YIELD)],
    },
    BuiltinSpecies {
        species: "BrCl",
        cross_section: BuiltinCrossSection::Fixed(&BRCL_CROSS_SECTION),
        channels: &[("j_BrCl", &UNIT_YIELD)],
    },
    BuiltinSpecies {
        species: "CH3CHO",
        cross_section: BuiltinCrossSection::Fixed(&CH3CHO_CROSS_SECTION),
        channels: &[("j_CH3CHO", &CH3CHO_YIELD)],
    },
    BuiltinSpecies {
        species: "CH3COCH3",
        cross_section: BuiltinCrossSection::Fixed(&CH3COCH3_CROSS_SECTION),
        channels: &[("j_CH3COCH3", &CH3COCH3_YIELD)],
    },
    BuiltinSpecies {
        species: "MGLY",
        cross_section: BuiltinCrossSection::Fixed(&MGLY_CROSS_SECTION),
        channels: &[("j_MGLY", &MGLY_YIELD)],
    },
    BuiltinSpecies {
        species: "PAN",
        cross_section: BuiltinCrossSection::Fixed(&PAN_CROSS_SECTION),
        channels: &[("j_PAN", &UNIT_YIELD)],
    },
    BuiltinSpecies {
        species: "CFCl3",
        cross_section: BuiltinCrossSection::Fixed(&CFCL3_CROSS_SECTION),
        channels: &[("j_CFCl3", &UNIT_YIELD)],
    },
    BuiltinSpecies {
        species: "CF2Cl2",
        cross_section: BuiltinCrossSection::Fixed(&CF2CL2_CROSS_SECTION),
        channels: &[("j_CF2Cl2", &UNIT_YIELD)],
    },
    BuiltinSpecies {
        species: "CCl4",
        cross_section: BuiltinCrossSection::Fixed(&CCL4_CROSS_SECTION),
        channels: &[("j_CCl4", &UNIT_YIELD)],
    },
    BuiltinSpecies {
        species: "CH3Br",
        cross_section: BuiltinCrossSection::Fixed(&CH3BR_CROSS_SECTION),
        channels: &[("j_CH3Br", &UNIT_YIELD)],
    },
    BuiltinSpecies {
        species: "CH3Cl",
        cross_section: BuiltinCrossSection::Fixed(&CH3CL_CROSS_SECTION),
        channels: &[("j_CH3Cl", &UNIT_YIELD)],
    },
];

/// Rates without a measured spectrum of their own, mapped to a stand-in.
pub(crate) const BUILTIN_ALIASES: &[(&str, &str)] = &[
    ("j_C2H5OOH", "j_CH3OOH"),
    ("j_ROOH", "j_CH3OOH"),
    ("j_RCHO", "j_CH3CHO"),
    ("j_MEK", "j_CH3COCH3"),
    ("j_GLYX", "j_MGLY"),
    // Hydroperoxides
    ("j_MP", "j_CH3OOH"),
    ("j_ETP", "j_CH3OOH"),
    ("j_RIP", "j_CH3OOH"),
    ("j_PRPN", "j_CH3OOH"),
    // Carbonyls
    ("j_ALD2", "j_CH3CHO"),
    ("j_GLYC", "j_CH3CHO"),
    ("j_MACR", "j_CH3CHO"),
    ("j_ACET", "j_CH3COCH3"),
    ("j_HAC", "j_CH3COCH3"),
    ("j_MVK", "j_CH3COCH3"),
    // Organic nitrates
    ("j_R4N2", "j_HNO3"),
    ("j_MPN", "j_HNO4"),
    ("j_PPN", "j_PAN"),
];
