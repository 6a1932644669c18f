//! Community seed tables.

use devscope_core::models::TimeBaselineParams;

type Table = &'static [(&'static str, f64)];

const BACKEND: Table = &[
    ("Python", 0.25),
    ("Java", 0.20),
    ("Go", 0.15),
    ("C++", 0.15),
    ("Node.js", 0.10),
    ("Ruby", 0.08),
    ("Other", 0.07),
];

const FRONTEND: Table = &[
    ("JavaScript", 0.35),
    ("TypeScript", 0.25),
    ("React", 0.20),
    ("Vue", 0.12),
    ("CSS", 0.05),
    ("HTML", 0.03),
];

const DEVOPS: Table = &[
    ("Go", 0.25),
    ("Python", 0.20),
    ("Bash", 0.20),
    ("Rust", 0.15),
    ("C", 0.10),
    ("Other", 0.10),
];

const AI_ML: Table = &[
    ("Python", 0.50),
    ("CUDA", 0.15),
    ("C++", 0.15),
    ("Julia", 0.10),
    ("R", 0.05),
    ("Other", 0.05),
];

const DATA_ENGINEER: Table = &[
    ("Python", 0.35),
    ("Scala", 0.20),
    ("SQL", 0.20),
    ("Java", 0.15),
    ("R", 0.05),
    ("Other", 0.05),
];

/// Archetype label → category distribution.
pub const ARCHETYPE_TENDENCIES: &[(&str, Table)] = &[
    ("Backend Developer", BACKEND),
    ("Frontend Developer", FRONTEND),
    ("DevOps/Infrastructure", DEVOPS),
    ("AI/ML Developer", AI_ML),
    ("Data Engineer", DATA_ENGINEER),
];

/// Distribution for archetypes missing from [`ARCHETYPE_TENDENCIES`].
pub const DEFAULT_TENDENCY: Table = &[
    ("Python", 0.20),
    ("JavaScript", 0.15),
    ("Java", 0.15),
    ("Go", 0.12),
    ("Rust", 0.10),
    ("C++", 0.10),
    ("Other", 0.18),
];

pub(crate) const MEDIUM_PARAMS: TimeBaselineParams = TimeBaselineParams {
    shape: 1.5,
    scale: 7.2,
    prob_30d: 0.60,
};

/// Activity level → community Weibull parameters (scale in days).
pub const ACTIVITY_LEVELS: &[(&str, TimeBaselineParams)] = &[
    (
        "active",
        TimeBaselineParams {
            shape: 1.8,
            scale: 3.5,
            prob_30d: 0.85,
        },
    ),
    ("medium", MEDIUM_PARAMS),
    (
        "sporadic",
        TimeBaselineParams {
            shape: 1.2,
            scale: 15.0,
            prob_30d: 0.35,
        },
    ),
];
