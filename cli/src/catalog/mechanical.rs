use super::builtin::{row, QuantityDef};

pub const LENGTH: QuantityDef = QuantityDef {
    id: "length",
    name: "Length",
    non_negative: true,
    units: &[
        row("m", "Meter", 1.0),
        row("km", "Kilometer", 1000.0),
        row("cm", "Centimeter", 0.01),
        row("mm", "Millimeter", 0.001),
        row("µm", "Micrometer", 1e-6).aka(&["um", "μm"]),
        row("nm", "Nanometer", 1e-9),
        row("Å", "Ångström", 1e-10).aka(&["angstrom"]),
        row("mi", "Mile", 1609.344),
        row("yd", "Yard", 0.9144),
        row("ft", "Foot", 0.3048),
        row("in", "Inch", 0.0254),
        row("nmi", "Nautical mile", 1852.0),
    ],
};

pub const AREA: QuantityDef = QuantityDef {
    id: "area",
    name: "Area",
    non_negative: true,
    units: &[
        row("m²", "Square meter", 1.0).aka(&["m2"]),
        row("km²", "Square kilometer", 1e6).aka(&["km2"]),
        row("cm²", "Square centimeter", 1e-4).aka(&["cm2"]),
        row("mm²", "Square millimeter", 1e-6).aka(&["mm2"]),
        row("ha", "Hectare", 1e4),
        row("ac", "Acre", 4046.8564224).aka(&["acre"]),
        row("mi²", "Square mile", 2589988.110336).aka(&["mi2"]),
        row("yd²", "Square yard", 0.83612736).aka(&["yd2"]),
        row("ft²", "Square foot", 0.09290304).aka(&["ft2"]),
        row("in²", "Square inch", 0.00064516).aka(&["in2"]),
    ],
};

pub const VOLUME: QuantityDef = QuantityDef {
    id: "volume",
    name: "Volume",
    non_negative: true,
    units: &[
        row("L", "Liter", 1.0).aka(&["l"]),
        row("mL", "Milliliter", 0.001).aka(&["ml"]),
        row("m³", "Cubic meter", 1000.0).aka(&["m3"]),
        row("cm³", "Cubic centimeter", 0.001).aka(&["cm3", "cc"]),
        row("gal", "US gallon", 3.785411784),
        row("imp gal", "Imperial gallon", 4.54609).aka(&["impgal"]),
        row("qt", "US quart", 0.946352946),
        row("pt", "US pint", 0.473176473),
        row("cup", "US cup", 0.2365882365),
        row("fl oz", "US fluid ounce", 0.0295735295625).aka(&["floz"]),
        row("tbsp", "Tablespoon", 0.01478676478125),
        row("tsp", "Teaspoon", 0.00492892159375),
        row("ft³", "Cubic foot", 28.316846592).aka(&["ft3"]),
        row("in³", "Cubic inch", 0.016387064).aka(&["in3"]),
    ],
};

pub const MASS: QuantityDef = QuantityDef {
    id: "mass",
    name: "Mass",
    non_negative: true,
    units: &[
        row("kg", "Kilogram", 1.0),
        row("g", "Gram", 0.001),
        row("mg", "Milligram", 1e-6),
        row("µg", "Microgram", 1e-9).aka(&["ug", "mcg"]),
        row("t", "Metric ton", 1000.0),
        row("ton", "US short ton", 907.18474),
        row("lb", "Pound", 0.45359237).aka(&["lbs"]),
        row("oz", "Ounce", 0.028349523125),
        row("st", "Stone", 6.35029318),
        row("ct", "Carat", 0.0002),
    ],
};

pub const TIME: QuantityDef = QuantityDef {
    id: "time",
    name: "Time",
    non_negative: false,
    units: &[
        row("s", "Second", 1.0).aka(&["sec"]),
        row("ms", "Millisecond", 0.001),
        row("µs", "Microsecond", 1e-6).aka(&["us"]),
        row("ns", "Nanosecond", 1e-9),
        row("min", "Minute", 60.0),
        row("h", "Hour", 3600.0).aka(&["hr"]),
        row("d", "Day", 86400.0).aka(&["day"]),
        row("wk", "Week", 604800.0),
        row("mo", "Month (1/12 year)", 2628000.0),
        row("yr", "Year (365 days)", 31536000.0),
    ],
};

pub const SPEED: QuantityDef = QuantityDef {
    id: "speed",
    name: "Speed",
    non_negative: false,
    units: &[
        row("m/s", "Meter per second", 1.0).aka(&["mps"]),
        row("km/h", "Kilometer per hour", 0.2777777777777778).aka(&["kph", "kmh"]),
        row("mph", "Mile per hour", 0.44704),
        row("kn", "Knot", 0.5144444444444445).aka(&["kt"]),
        row("ft/s", "Foot per second", 0.3048).aka(&["fps"]),
        row("c", "Speed of light", 299792458.0),
    ],
};

pub const ACCELERATION: QuantityDef = QuantityDef {
    id: "acceleration",
    name: "Acceleration",
    non_negative: false,
    units: &[
        row("m/s²", "Meter per second squared", 1.0).aka(&["m/s2"]),
        row("g₀", "Standard gravity", 9.80665).aka(&["g0"]),
        row("ft/s²", "Foot per second squared", 0.3048).aka(&["ft/s2"]),
        row("Gal", "Gal", 0.01),
        row("mGal", "Milligal", 1e-5),
    ],
};

pub const ANGLE: QuantityDef = QuantityDef {
    id: "angle",
    name: "Angle",
    non_negative: false,
    units: &[
        row("rad", "Radian", 1.0),
        row("mrad", "Milliradian", 0.001),
        row("°", "Degree", 0.017453292519943295).aka(&["deg"]),
        row("grad", "Gradian", 0.015707963267948967).aka(&["gon"]),
        row("′", "Arcminute", 2.908882086657216e-4).aka(&["arcmin"]),
        row("″", "Arcsecond", 4.84813681109536e-6).aka(&["arcsec"]),
        row("turn", "Turn", 6.283185307179586).aka(&["rev"]),
    ],
};

pub const FREQUENCY: QuantityDef = QuantityDef {
    id: "frequency",
    name: "Frequency",
    non_negative: true,
    units: &[
        row("Hz", "Hertz", 1.0),
        row("kHz", "Kilohertz", 1e3),
        row("MHz", "Megahertz", 1e6),
        row("GHz", "Gigahertz", 1e9),
        row("THz", "Terahertz", 1e12),
        row("rpm", "Revolution per minute", 0.016666666666666666),
        row("rad/s", "Radian per second", 0.15915494309189535),
    ],
};

pub const FORCE: QuantityDef = QuantityDef {
    id: "force",
    name: "Force",
    non_negative: false,
    units: &[
        row("N", "Newton", 1.0),
        row("kN", "Kilonewton", 1e3),
        row("MN", "Meganewton", 1e6),
        row("dyn", "Dyne", 1e-5),
        row("lbf", "Pound-force", 4.4482216152605),
        row("kgf", "Kilogram-force", 9.80665),
        row("ozf", "Ounce-force", 0.27801385095378125),
        row("pdl", "Poundal", 0.138254954376),
    ],
};

pub const TORQUE: QuantityDef = QuantityDef {
    id: "torque",
    name: "Torque",
    non_negative: false,
    units: &[
        row("N·m", "Newton meter", 1.0).aka(&["Nm", "N*m"]),
        row("kN·m", "Kilonewton meter", 1e3).aka(&["kNm"]),
        row("N·cm", "Newton centimeter", 0.01).aka(&["Ncm"]),
        row("lbf·ft", "Pound-force foot", 1.3558179483314004).aka(&["lbft", "ft-lb"]),
        row("lbf·in", "Pound-force inch", 0.1129848290276167).aka(&["lbin", "in-lb"]),
        row("kgf·m", "Kilogram-force meter", 9.80665).aka(&["kgfm"]),
        row("dyn·cm", "Dyne centimeter", 1e-7).aka(&["dyncm"]),
    ],
};

pub const PRESSURE: QuantityDef = QuantityDef {
    id: "pressure",
    name: "Pressure",
    non_negative: false,
    units: &[
        row("Pa", "Pascal", 1.0),
        row("hPa", "Hectopascal", 100.0),
        row("kPa", "Kilopascal", 1e3),
        row("MPa", "Megapascal", 1e6),
        row("GPa", "Gigapascal", 1e9),
        row("bar", "Bar", 1e5),
        row("mbar", "Millibar", 100.0),
        row("atm", "Standard atmosphere", 101325.0),
        row("psi", "Pound per square inch", 6894.757293168),
        row("ksi", "Kilopound per square inch", 6894757.293168),
        row("mmHg", "Millimeter of mercury", 133.322387415),
        row("inHg", "Inch of mercury", 3386.389),
        row("Torr", "Torr", 133.32236842105263).aka(&["torr"]),
        row("inH₂O", "Inch of water", 249.08891).aka(&["inH2O"]),
    ],
};

pub const ENERGY: QuantityDef = QuantityDef {
    id: "energy",
    name: "Energy",
    non_negative: false,
    units: &[
        row("J", "Joule", 1.0),
        row("kJ", "Kilojoule", 1e3),
        row("MJ", "Megajoule", 1e6),
        row("cal", "Calorie", 4.184),
        row("kcal", "Kilocalorie", 4184.0).aka(&["Cal"]),
        row("Wh", "Watt hour", 3600.0),
        row("kWh", "Kilowatt hour", 3.6e6),
        row("eV", "Electronvolt", 1.602176634e-19),
        row("BTU", "British thermal unit", 1055.05585262).aka(&["Btu"]),
        row("thm", "US therm", 105480400.0),
        row("ft·lbf", "Foot-pound", 1.3558179483314004).aka(&["ftlbf"]),
        row("erg", "Erg", 1e-7),
    ],
};

pub const POWER: QuantityDef = QuantityDef {
    id: "power",
    name: "Power",
    non_negative: false,
    units: &[
        row("W", "Watt", 1.0),
        row("mW", "Milliwatt", 1e-3),
        row("kW", "Kilowatt", 1e3),
        row("MW", "Megawatt", 1e6),
        row("GW", "Gigawatt", 1e9),
        row("hp", "Mechanical horsepower", 745.6998715822702),
        row("PS", "Metric horsepower", 735.49875),
        row("BTU/h", "BTU per hour", 0.29307107017222).aka(&["btuh"]),
        row("TR", "Ton of refrigeration", 3516.8528420667),
        row("erg/s", "Erg per second", 1e-7),
    ],
};

pub const DATA_STORAGE: QuantityDef = QuantityDef {
    id: "data-storage",
    name: "Data Storage",
    non_negative: true,
    units: &[
        row("B", "Byte", 1.0),
        row("bit", "Bit", 0.125).aka(&["b"]),
        row("kB", "Kilobyte", 1e3).aka(&["KB"]),
        row("MB", "Megabyte", 1e6),
        row("GB", "Gigabyte", 1e9),
        row("TB", "Terabyte", 1e12),
        row("PB", "Petabyte", 1e15),
        row("KiB", "Kibibyte", 1024.0),
        row("MiB", "Mebibyte", 1048576.0),
        row("GiB", "Gibibyte", 1073741824.0),
        row("TiB", "Tebibyte", 1099511627776.0),
    ],
};

pub const DENSITY: QuantityDef = QuantityDef {
    id: "density",
    name: "Density",
    non_negative: true,
    units: &[
        row("kg/m³", "Kilogram per cubic meter", 1.0).aka(&["kg/m3", "g/L"]),
        row("g/cm³", "Gram per cubic centimeter", 1000.0).aka(&["g/cm3", "g/cc"]),
        row("g/mL", "Gram per milliliter", 1000.0).aka(&["g/ml"]),
        row("kg/L", "Kilogram per liter", 1000.0),
        row("mg/L", "Milligram per liter", 0.001),
        row("lb/ft³", "Pound per cubic foot", 16.018463373960138).aka(&["lb/ft3"]),
        row("lb/in³", "Pound per cubic inch", 27679.904710203125).aka(&["lb/in3"]),
        row("lb/gal", "Pound per US gallon", 119.82642731689663),
        row("oz/in³", "Ounce per cubic inch", 1729.994044387945).aka(&["oz/in3"]),
    ],
};

pub const DYNAMIC_VISCOSITY: QuantityDef = QuantityDef {
    id: "dynamic-viscosity",
    name: "Dynamic Viscosity",
    non_negative: true,
    units: &[
        row("Pa·s", "Pascal second", 1.0).aka(&["Pas", "Pa*s", "N·s/m²"]),
        row("mPa·s", "Millipascal second", 0.001).aka(&["mPas"]),
        row("P", "Poise", 0.1),
        row("cP", "Centipoise", 0.001).aka(&["cp"]),
        row("kgf·s/m²", "Kilogram-force second per square meter", 9.80665),
        row("lbf·s/ft²", "Pound-force second per square foot", 47.88025898033584),
        row("lbf·s/in²", "Pound-force second per square inch", 6894.757293168).aka(&["reyn"]),
        row("lb/(ft·s)", "Pound per foot second", 1.4881639435695537),
    ],
};

pub const KINEMATIC_VISCOSITY: QuantityDef = QuantityDef {
    id: "kinematic-viscosity",
    name: "Kinematic Viscosity",
    non_negative: true,
    units: &[
        row("m²/s", "Square meter per second", 1.0).aka(&["m2/s"]),
        row("cm²/s", "Square centimeter per second", 1e-4).aka(&["cm2/s"]),
        row("mm²/s", "Square millimeter per second", 1e-6).aka(&["mm2/s"]),
        row("St", "Stokes", 1e-4),
        row("cSt", "Centistokes", 1e-6).aka(&["cst"]),
        row("ft²/s", "Square foot per second", 0.09290304).aka(&["ft2/s"]),
        row("in²/s", "Square inch per second", 0.00064516).aka(&["in2/s"]),
    ],
};

pub const FLOW_RATE: QuantityDef = QuantityDef {
    id: "flow-rate",
    name: "Volumetric Flow Rate",
    non_negative: true,
    units: &[
        row("m³/s", "Cubic meter per second", 1.0).aka(&["m3/s"]),
        row("m³/h", "Cubic meter per hour", 2.777777777777778e-4).aka(&["m3/h"]),
        row("L/s", "Liter per second", 0.001),
        row("L/min", "Liter per minute", 1.6666666666666667e-5).aka(&["lpm"]),
        row("gal/min", "US gallon per minute", 6.30901964e-5).aka(&["gpm"]),
        row("ft³/min", "Cubic foot per minute", 4.719474432e-4).aka(&["cfm"]),
        row("ft³/s", "Cubic foot per second", 0.028316846592).aka(&["cfs"]),
    ],
};

pub const PERMEABILITY: QuantityDef = QuantityDef {
    id: "permeability",
    name: "Permeability",
    non_negative: true,
    units: &[
        row("m²", "Square meter", 1.0).aka(&["m2"]),
        row("cm²", "Square centimeter", 1e-4).aka(&["cm2"]),
        row("µm²", "Square micrometer", 1e-12).aka(&["um2"]),
        row("D", "Darcy", 9.869233e-13).aka(&["darcy"]),
        row("mD", "Millidarcy", 9.869233e-16).aka(&["md"]),
    ],
};

pub const ILLUMINANCE: QuantityDef = QuantityDef {
    id: "illuminance",
    name: "Illuminance",
    non_negative: true,
    units: &[
        row("lx", "Lux", 1.0).aka(&["lux", "lm/m²"]),
        row("klx", "Kilolux", 1e3),
        row("fc", "Foot-candle", 10.763910416709722),
        row("ph", "Phot", 1e4),
        row("nx", "Nox", 0.001),
    ],
};

pub const QUANTITIES: &[&QuantityDef] = &[
    &LENGTH,
    &AREA,
    &VOLUME,
    &MASS,
    &TIME,
    &SPEED,
    &ACCELERATION,
    &ANGLE,
    &FREQUENCY,
    &FORCE,
    &TORQUE,
    &PRESSURE,
    &ENERGY,
    &POWER,
    &DATA_STORAGE,
    &DENSITY,
    &DYNAMIC_VISCOSITY,
    &KINEMATIC_VISCOSITY,
    &FLOW_RATE,
    &PERMEABILITY,
    &ILLUMINANCE,
];
