//! Periodic table data for elements 1–118.
//!
//! Only what formula parsing needs: symbol lookup and standard atomic
//! weights. Symbols are case sensitive ("Co" is cobalt, "CO" is not a
//! symbol).

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Element {
    H = 1,
    He = 2,
    Li = 3,
    Be = 4,
    B = 5,
    C = 6,
    N = 7,
    O = 8,
    F = 9,
    Ne = 10,
    Na = 11,
    Mg = 12,
    Al = 13,
    Si = 14,
    P = 15,
    S = 16,
    Cl = 17,
    Ar = 18,
    K = 19,
    Ca = 20,
    Sc = 21,
    Ti = 22,
    V = 23,
    Cr = 24,
    Mn = 25,
    Fe = 26,
    Co = 27,
    Ni = 28,
    Cu = 29,
    Zn = 30,
    Ga = 31,
    Ge = 32,
    As = 33,
    Se = 34,
    Br = 35,
    Kr = 36,
    Rb = 37,
    Sr = 38,
    Y = 39,
    Zr = 40,
    Nb = 41,
    Mo = 42,
    Tc = 43,
    Ru = 44,
    Rh = 45,
    Pd = 46,
    Ag = 47,
    Cd = 48,
    In = 49,
    Sn = 50,
    Sb = 51,
    Te = 52,
    I = 53,
    Xe = 54,
    Cs = 55,
    Ba = 56,
    La = 57,
    Ce = 58,
    Pr = 59,
    Nd = 60,
    Pm = 61,
    Sm = 62,
    Eu = 63,
    Gd = 64,
    Tb = 65,
    Dy = 66,
    Ho = 67,
    Er = 68,
    Tm = 69,
    Yb = 70,
    Lu = 71,
    Hf = 72,
    Ta = 73,
    W = 74,
    Re = 75,
    Os = 76,
    Ir = 77,
    Pt = 78,
    Au = 79,
    Hg = 80,
    Tl = 81,
    Pb = 82,
    Bi = 83,
    Po = 84,
    At = 85,
    Rn = 86,
    Fr = 87,
    Ra = 88,
    Ac = 89,
    Th = 90,
    Pa = 91,
    U = 92,
    Np = 93,
    Pu = 94,
    Am = 95,
    Cm = 96,
    Bk = 97,
    Cf = 98,
    Es = 99,
    Fm = 100,
    Md = 101,
    No = 102,
    Lr = 103,
    Rf = 104,
    Db = 105,
    Sg = 106,
    Bh = 107,
    Hs = 108,
    Mt = 109,
    Ds = 110,
    Rg = 111,
    Cn = 112,
    Nh = 113,
    Fl = 114,
    Mc = 115,
    Lv = 116,
    Ts = 117,
    Og = 118,
}

impl Element {
    pub fn from_atomic_num(n: u8) -> Option<Element> {
        if (1..=118).contains(&n) {
            // SAFETY: Element is repr(u8) with variants 1..=118, and we checked bounds.
            Some(unsafe { std::mem::transmute::<u8, Element>(n) })
        } else {
            None
        }
    }

    pub fn from_symbol(s: &str) -> Option<Element> {
        SYMBOLS
            .iter()
            .position(|sym| *sym == s)
            .and_then(|idx| Element::from_atomic_num(idx as u8 + 1))
    }

    pub fn atomic_num(self) -> u8 {
        self as u8
    }

    pub fn symbol(self) -> &'static str {
        SYMBOLS[self as usize - 1]
    }

    /// Standard atomic weight in daltons, averaged over natural isotopic
    /// abundance. Radioactive elements without stable isotopes use the mass
    /// number of the longest-lived isotope.
    pub fn atomic_weight(self) -> f64 {
        ATOMIC_WEIGHTS[self as usize - 1]
    }
}

static SYMBOLS: [&str; 118] = [
    "H", "He", "Li", "Be", "B", "C", "N", "O", "F", "Ne",
    "Na", "Mg", "Al", "Si", "P", "S", "Cl", "Ar", "K", "Ca",
    "Sc", "Ti", "V", "Cr", "Mn", "Fe", "Co", "Ni", "Cu", "Zn",
    "Ga", "Ge", "As", "Se", "Br", "Kr", "Rb", "Sr", "Y", "Zr",
    "Nb", "Mo", "Tc", "Ru", "Rh", "Pd", "Ag", "Cd", "In", "Sn",
    "Sb", "Te", "I", "Xe", "Cs", "Ba", "La", "Ce", "Pr", "Nd",
    "Pm", "Sm", "Eu", "Gd", "Tb", "Dy", "Ho", "Er", "Tm", "Yb",
    "Lu", "Hf", "Ta", "W", "Re", "Os", "Ir", "Pt", "Au", "Hg",
    "Tl", "Pb", "Bi", "Po", "At", "Rn", "Fr", "Ra", "Ac", "Th",
    "Pa", "U", "Np", "Pu", "Am", "Cm", "Bk", "Cf", "Es", "Fm",
    "Md", "No", "Lr", "Rf", "Db", "Sg", "Bh", "Hs", "Mt", "Ds",
    "Rg", "Cn", "Nh", "Fl", "Mc", "Lv", "Ts", "Og",
];

// IUPAC CIAAW 2021 standard atomic weights.
static ATOMIC_WEIGHTS: [f64; 118] = [
    1.008, 4.002602, 6.941, 9.0121831, 10.81,              // H  He Li Be B
    12.011, 14.007, 15.999, 18.998403163, 20.1797,         // C  N  O  F  Ne
    22.98976928, 24.305, 26.9815384, 28.085, 30.973761998, // Na Mg Al Si P
    32.06, 35.45, 39.948, 39.0983, 40.078,                 // S  Cl Ar K  Ca
    44.955908, 47.867, 50.9415, 51.9961, 54.938043,        // Sc Ti V  Cr Mn
    55.845, 58.933194, 58.6934, 63.546, 65.38,             // Fe Co Ni Cu Zn
    69.723, 72.630, 74.921595, 78.971, 79.904,             // Ga Ge As Se Br
    83.798, 85.4678, 87.62, 88.90584, 91.224,              // Kr Rb Sr Y  Zr
    92.90637, 95.95, 97.0, 101.07, 102.90549,              // Nb Mo Tc Ru Rh
    106.42, 107.8682, 112.414, 114.818, 118.710,           // Pd Ag Cd In Sn
    121.760, 127.60, 126.90447, 131.293, 132.90545196,     // Sb Te I  Xe Cs
    137.327, 138.90547, 140.116, 140.90766, 144.242,       // Ba La Ce Pr Nd
    145.0, 150.36, 151.964, 157.25, 158.925354,            // Pm Sm Eu Gd Tb
    162.500, 164.930328, 167.259, 168.934218, 173.045,     // Dy Ho Er Tm Yb
    174.9668, 178.486, 180.94788, 183.84, 186.207,         // Lu Hf Ta W  Re
    190.23, 192.217, 195.084, 196.966570, 200.592,         // Os Ir Pt Au Hg
    204.38, 207.2, 208.98040, 209.0, 210.0,                // Tl Pb Bi Po At
    222.0, 223.0, 226.0, 227.0, 232.0377,                  // Rn Fr Ra Ac Th
    231.03588, 238.02891, 237.0, 244.0, 243.0,             // Pa U  Np Pu Am
    247.0, 247.0, 251.0, 252.0, 257.0,                     // Cm Bk Cf Es Fm
    258.0, 259.0, 266.0, 267.0, 268.0,                     // Md No Lr Rf Db
    269.0, 270.0, 277.0, 278.0, 281.0,                     // Sg Bh Hs Mt Ds
    282.0, 285.0, 286.0, 289.0, 290.0,                     // Rg Cn Nh Fl Mc
    293.0, 294.0, 294.0,                                   // Lv Ts Og
];
