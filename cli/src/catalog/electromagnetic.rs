use super::builtin::{row, QuantityDef};

// CGS (ab-/stat-) factors are the published rounded values; they are not
// re-derived from c.

pub const ELECTRIC_RESISTANCE: QuantityDef = QuantityDef {
    id: "electric-resistance",
    name: "Electric Resistance",
    non_negative: false,
    units: &[
        row("Ω", "Ohm", 1.0).aka(&["ohm", "\u{2126}"]),
        row("µΩ", "Microohm", 1e-6).aka(&["uohm"]),
        row("mΩ", "Milliohm", 1e-3).aka(&["mohm"]),
        row("kΩ", "Kiloohm", 1e3).aka(&["kohm"]),
        row("MΩ", "Megaohm", 1e6).aka(&["Mohm"]),
        row("GΩ", "Gigaohm", 1e9).aka(&["Gohm"]),
        row("abΩ", "Abohm", 1e-9).aka(&["abohm"]),
        row("statΩ", "Statohm", 8.987551787e11).aka(&["statohm"]),
    ],
};

pub const ELECTRIC_CONDUCTANCE: QuantityDef = QuantityDef {
    id: "electric-conductance",
    name: "Electric Conductance",
    non_negative: false,
    units: &[
        row("S", "Siemens", 1.0).aka(&["mho", "℧"]),
        row("mS", "Millisiemens", 1e-3),
        row("µS", "Microsiemens", 1e-6).aka(&["uS"]),
        row("kS", "Kilosiemens", 1e3),
        row("abS", "Absiemens", 1e9).aka(&["abmho"]),
        row("statS", "Statsiemens", 1.112650056e-12).aka(&["statmho"]),
    ],
};

pub const CAPACITANCE: QuantityDef = QuantityDef {
    id: "capacitance",
    name: "Capacitance",
    non_negative: false,
    units: &[
        row("F", "Farad", 1.0),
        row("mF", "Millifarad", 1e-3),
        row("µF", "Microfarad", 1e-6).aka(&["uF"]),
        row("nF", "Nanofarad", 1e-9),
        row("pF", "Picofarad", 1e-12),
        row("abF", "Abfarad", 1e9),
        row("statF", "Statfarad", 1.112650056e-12),
    ],
};

pub const INDUCTANCE: QuantityDef = QuantityDef {
    id: "inductance",
    name: "Inductance",
    non_negative: false,
    units: &[
        row("H", "Henry", 1.0),
        row("mH", "Millihenry", 1e-3),
        row("µH", "Microhenry", 1e-6).aka(&["uH"]),
        row("nH", "Nanohenry", 1e-9),
        row("abH", "Abhenry", 1e-9),
        row("statH", "Stathenry", 8.987551787e11),
    ],
};

pub const ELECTRIC_CHARGE: QuantityDef = QuantityDef {
    id: "electric-charge",
    name: "Electric Charge",
    non_negative: false,
    units: &[
        row("C", "Coulomb", 1.0),
        row("mC", "Millicoulomb", 1e-3),
        row("µC", "Microcoulomb", 1e-6).aka(&["uC"]),
        row("nC", "Nanocoulomb", 1e-9),
        row("Ah", "Ampere hour", 3600.0),
        row("mAh", "Milliampere hour", 3.6),
        row("e", "Elementary charge", 1.602176634e-19),
        row("F", "Faraday", 96485.33212),
        row("abC", "Abcoulomb", 10.0),
        row("statC", "Statcoulomb", 3.335640952e-10).aka(&["Fr"]),
    ],
};

pub const ELECTRIC_CURRENT: QuantityDef = QuantityDef {
    id: "electric-current",
    name: "Electric Current",
    non_negative: false,
    units: &[
        row("A", "Ampere", 1.0),
        row("mA", "Milliampere", 1e-3),
        row("µA", "Microampere", 1e-6).aka(&["uA"]),
        row("kA", "Kiloampere", 1e3),
        row("abA", "Abampere", 10.0).aka(&["Bi"]),
        row("statA", "Statampere", 3.335640952e-10),
    ],
};

pub const VOLTAGE: QuantityDef = QuantityDef {
    id: "voltage",
    name: "Voltage",
    non_negative: false,
    units: &[
        row("V", "Volt", 1.0),
        row("µV", "Microvolt", 1e-6).aka(&["uV"]),
        row("mV", "Millivolt", 1e-3),
        row("kV", "Kilovolt", 1e3),
        row("MV", "Megavolt", 1e6),
        row("abV", "Abvolt", 1e-8),
        row("statV", "Statvolt", 299.792458),
    ],
};

pub const MAGNETIC_FLUX: QuantityDef = QuantityDef {
    id: "magnetic-flux",
    name: "Magnetic Flux",
    non_negative: false,
    units: &[
        row("Wb", "Weber", 1.0).aka(&["V·s", "T·m²"]),
        row("mWb", "Milliweber", 1e-3),
        row("µWb", "Microweber", 1e-6).aka(&["uWb"]),
        row("Mx", "Maxwell", 1e-8),
    ],
};

pub const MAGNETIC_FLUX_DENSITY: QuantityDef = QuantityDef {
    id: "magnetic-flux-density",
    name: "Magnetic Flux Density",
    non_negative: false,
    units: &[
        row("T", "Tesla", 1.0).aka(&["Wb/m²"]),
        row("mT", "Millitesla", 1e-3),
        row("µT", "Microtesla", 1e-6).aka(&["uT"]),
        row("nT", "Nanotesla", 1e-9),
        row("G", "Gauss", 1e-4),
        row("mG", "Milligauss", 1e-7),
        row("γ", "Gamma", 1e-9).aka(&["gamma"]),
    ],
};

pub const MAGNETIC_FIELD_STRENGTH: QuantityDef = QuantityDef {
    id: "magnetic-field-strength",
    name: "Magnetic Field Strength",
    non_negative: false,
    units: &[
        row("A/m", "Ampere per meter", 1.0),
        row("kA/m", "Kiloampere per meter", 1e3),
        row("Oe", "Oersted", 79.57747154594767),
    ],
};

pub const QUANTITIES: &[&QuantityDef] = &[
    &ELECTRIC_RESISTANCE,
    &ELECTRIC_CONDUCTANCE,
    &CAPACITANCE,
    &INDUCTANCE,
    &ELECTRIC_CHARGE,
    &ELECTRIC_CURRENT,
    &VOLTAGE,
    &MAGNETIC_FLUX,
    &MAGNETIC_FLUX_DENSITY,
    &MAGNETIC_FIELD_STRENGTH,
];
