//! Built-in flux reference data.
//!
//! Overhead-sun actinic flux (photons cm⁻² s⁻¹) per wavelength bin, tabulated
//! on a fixed pressure grid (Pa) from the top of the model atmosphere down to
//! the surface. Slant-path attenuation is derived from the ratio of each row to
//! the top-of-atmosphere flux.

use crate::bins::NBINS;

/// Pressure levels (Pa), strictly increasing.
pub const PRESSURE_LEVELS: [f64; 13] = [
    10.0, 100.0, 500.0, 1000.0, 2000.0, 5000.0, 10000.0, 20000.0, 30000.0, 50000.0, 70000.0,
    85000.0, 101325.0,
];

/// Top-of-atmosphere solar flux per bin.
pub const TOP_OF_ATMOSPHERE: [f64; NBINS] = [
    1.391e12, 1.627e12, 1.664e12, 9.278e11, 7.842e12, 4.68e12, 9.918e12, 1.219e13, 6.364e14,
    4.049e14, 3.15e14, 5.889e14, 7.678e14, 5.045e14, 8.902e14, 3.853e15, 1.547e16, 2.131e17,
];

/// Overhead-sun flux at each of [`PRESSURE_LEVELS`].
pub const OVERHEAD_FLUX: [[f64; NBINS]; 13] = [
    [
        8.31e11, 1.217e12, 1.363e12, 8.138e11, 7.376e12, 4.593e12, 9.75e12, 1.198e13, 4.357e14,
        2.84e14, 2.443e14, 5.543e14, 7.537e14, 5.009e14, 8.877e14, 3.852e15, 1.547e16, 2.131e17,
    ],
    [
        8.054e9, 8.932e10, 2.257e11, 2.501e11, 4.252e12, 3.878e12, 8.364e12, 1.024e13, 1.439e13,
        1.166e13, 2.484e13, 3.215e14, 6.375e14, 4.699e14, 8.657e14, 3.842e15, 1.547e16,
        2.127e17,
    ],
    [
        10.59, 9.336e5, 8.711e7, 1.486e9, 4.057e11, 1.991e12, 4.593e12, 5.574e12, 3.646e7,
        6.726e7, 4.41e9, 4.107e13, 3.387e14, 3.69e14, 7.873e14, 3.802e15, 1.545e16, 2.113e17,
    ],
    [
        1.104e-10, 0.7092, 5921.0, 3.017e6, 2.559e10, 1.003e12, 2.507e12, 3.034e12, 197.0,
        788.3, 1.3e6, 5.916e12, 1.866e14, 2.937e14, 7.196e14, 3.763e15, 1.544e16, 2.1e17,
    ],
    [
        2.252e-32, 7.172e-13, 4.613e-5, 19.98, 1.514e8, 3.57e11, 1.038e12, 1.273e12, 5.113e-5,
        0.0005387, 50.07, 5.238e11, 8.843e13, 2.205e14, 6.42e14, 3.711e15, 1.54e16, 2.083e17,
    ],
    [
        9.339e-67, 3.992e-48, 1.045e-28, 2.405e-14, 103.0, 4.45e10, 1.975e11, 2.672e11,
        6.283e-13, 2.119e-11, 0.0002491, 2.826e10, 3.574e13, 1.549e14, 5.553e14, 3.625e15,
        1.53e16, 2.062e17,
    ],
    [
        9.339e-67, 1.092e-66, 1.117e-66, 1.071e-38, 1.463e-8, 3.226e9, 2.829e10, 4.734e10,
        3.064e-16, 1.683e-14, 1.494e-6, 8.189e9, 2.402e13, 1.313e14, 5.141e14, 3.541e15,
        1.514e16, 2.05e17,
    ],
    [
        9.339e-67, 1.092e-66, 1.117e-66, 6.229e-67, 4.999e-28, 2.663e7, 9.003e8, 2.364e9,
        1.342e-17, 9.024e-16, 1.816e-7, 4.759e9, 1.964e13, 1.182e14, 4.809e14, 3.408e15,
        1.482e16, 2.038e17,
    ],
    [
        9.339e-67, 1.092e-66, 1.117e-66, 6.229e-67, 1.856e-47, 2.358e5, 3.068e7, 1.269e8,
        3.91e-18, 2.85e-16, 7.854e-8, 3.742e9, 1.762e13, 1.103e14, 4.561e14, 3.284e15, 1.451e16,
        2.029e17,
    ],
    [
        9.339e-67, 1.092e-66, 1.117e-66, 6.229e-67, 5.265e-66, 19.3, 3.712e4, 3.819e5,
        1.034e-18, 8.241e-17, 3.148e-8, 2.773e9, 1.499e13, 9.802e13, 4.136e14, 3.052e15,
        1.391e16, 2.012e17,
    ],
    [
        9.339e-67, 1.092e-66, 1.117e-66, 6.229e-67, 5.265e-66, 0.001625, 46.16, 1183.0,
        5.831e-19, 4.844e-17, 2.097e-8, 2.32e9, 1.323e13, 8.836e13, 3.772e14, 2.838e15,
        1.333e16, 1.995e17,
    ],
    [
        9.339e-67, 1.092e-66, 1.117e-66, 6.229e-67, 5.265e-66, 1.431e-6, 0.3063, 15.57,
        4.017e-19, 3.429e-17, 1.606e-8, 2.047e9, 1.209e13, 8.183e13, 3.521e14, 2.688e15,
        1.291e16, 1.983e17,
    ],
    [
        9.339e-67, 1.092e-66, 1.117e-66, 6.229e-67, 5.265e-66, 6.796e-10, 0.00131, 0.1403,
        2.947e-19, 2.576e-17, 1.281e-8, 1.815e9, 1.1e13, 7.541e13, 3.27e14, 2.533e15, 1.247e16,
        1.97e17,
    ],
];

/// Cosine of the solar zenith angle at which the twilight curve is sampled.
pub const TWILIGHT_COS_ZENITH: [f64; 5] = [-0.2, -0.15, -0.1, -0.05, 0.0];

/// Fraction of the horizon flux retained by diffuse bins below the horizon.
pub const TWILIGHT_FACTOR: [f64; 5] = [0.0, 0.004, 0.03, 0.2, 1.0];

/// Bins that keep a scattered-light contribution after sunset.
#[rustfmt::skip]
pub const DIFFUSE_BINS: [bool; NBINS] = [
    false, false, false, false, false, false,
    false, false, false, false, false, false,
    false, false, true, true, true, true,
];
