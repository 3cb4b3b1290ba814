use super::builtin::{row, QuantityDef};

pub const ABSORBED_DOSE: QuantityDef = QuantityDef {
    id: "absorbed-dose",
    name: "Absorbed Dose",
    non_negative: true,
    units: &[
        row("Gy", "Gray", 1.0).aka(&["J/kg"]),
        row("mGy", "Milligray", 1e-3),
        row("µGy", "Microgray", 1e-6).aka(&["uGy"]),
        row("cGy", "Centigray", 0.01),
        row("rad", "Rad", 0.01),
        row("mrad", "Millirad", 1e-5),
        row("erg/g", "Erg per gram", 1e-4),
    ],
};

pub const EQUIVALENT_DOSE: QuantityDef = QuantityDef {
    id: "equivalent-dose",
    name: "Equivalent Dose",
    non_negative: true,
    units: &[
        row("Sv", "Sievert", 1.0),
        row("mSv", "Millisievert", 1e-3),
        row("µSv", "Microsievert", 1e-6).aka(&["uSv"]),
        row("rem", "Rem", 0.01),
        row("mrem", "Millirem", 1e-5),
    ],
};

pub const RADIOACTIVITY: QuantityDef = QuantityDef {
    id: "radioactivity",
    name: "Radioactivity",
    non_negative: true,
    units: &[
        row("Bq", "Becquerel", 1.0),
        row("kBq", "Kilobecquerel", 1e3),
        row("MBq", "Megabecquerel", 1e6),
        row("GBq", "Gigabecquerel", 1e9),
        row("TBq", "Terabecquerel", 1e12),
        row("Ci", "Curie", 3.7e10),
        row("mCi", "Millicurie", 3.7e7),
        row("µCi", "Microcurie", 3.7e4).aka(&["uCi"]),
        row("nCi", "Nanocurie", 37.0),
        row("Rd", "Rutherford", 1e6),
        row("dpm", "Disintegrations per minute", 0.016666666666666666),
    ],
};

pub const RADIATION_EXPOSURE: QuantityDef = QuantityDef {
    id: "radiation-exposure",
    name: "Radiation Exposure",
    non_negative: true,
    units: &[
        row("C/kg", "Coulomb per kilogram", 1.0),
        row("mC/kg", "Millicoulomb per kilogram", 1e-3),
        row("R", "Roentgen", 2.58e-4),
        row("mR", "Milliroentgen", 2.58e-7),
        row("µR", "Microroentgen", 2.58e-10).aka(&["uR"]),
    ],
};

pub const QUANTITIES: &[&QuantityDef] = &[
    &ABSORBED_DOSE,
    &EQUIVALENT_DOSE,
    &RADIOACTIVITY,
    &RADIATION_EXPOSURE,
];
