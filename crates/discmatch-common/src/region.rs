//! Catalog country names to three-letter region codes.
//!
//! The catalog labels each release with the full English country name shown
//! next to its flag; uploads expect the three-letter code.

use phf::phf_map;

static COUNTRY_CODES: phf::Map<&'static str, &'static str> = phf_map! {
    "Afghanistan" => "AFG",
    "Albania" => "ALB",
    "Algeria" => "ALG",
    "Andorra" => "AND",
    "Angola" => "ANG",
    "Argentina" => "ARG",
    "Armenia" => "ARM",
    "Aruba" => "ARU",
    "Australia" => "AUS",
    "Austria" => "AUT",
    "Azerbaijan" => "AZE",
    "Bahamas" => "BAH",
    "Bahrain" => "BHR",
    "Bangladesh" => "BAN",
    "Barbados" => "BRB",
    "Belarus" => "BLR",
    "Belgium" => "BEL",
    "Belize" => "BLZ",
    "Benin" => "BEN",
    "Bermuda" => "BER",
    "Bhutan" => "BHU",
    "Bolivia" => "BOL",
    "Bosnia and Herzegovina" => "BIH",
    "Botswana" => "BOT",
    "Brazil" => "BRA",
    "British Virgin Islands" => "VGB",
    "Brunei" => "BRU",
    "Burkina Faso" => "BFA",
    "Burundi" => "BDI",
    "Cambodia" => "CAM",
    "Cameroon" => "CMR",
    "Canada" => "CAN",
    "Cape Verde" => "CPV",
    "Cayman Islands" => "CAY",
    "Central African Republic" => "CTA",
    "Chad" => "CHA",
    "Chile" => "CHI",
    "China" => "CHN",
    "Colombia" => "COL",
    "Comoros" => "COM",
    "Congo" => "CGO",
    "Cook Islands" => "COK",
    "Costa Rica" => "CRC",
    "Croatia" => "CRO",
    "Cuba" => "CUB",
    "Cyprus" => "CYP",
    "Dominican Republic" => "DOM",
    "Ecuador" => "ECU",
    "Egypt" => "EGY",
    "El Salvador" => "SLV",
    "Equatorial Guinea" => "EQG",
    "Eritrea" => "ERI",
    "Ethiopia" => "ETH",
    "Fiji" => "FIJ",
    "France" => "FRA",
    "Gabon" => "GAB",
    "Gambia" => "GAM",
    "Georgia" => "GEO",
    "Germany" => "GER",
    "Ghana" => "GHA",
    "Greece" => "GRE",
    "Grenada" => "GRN",
    "Guatemala" => "GUA",
    "Guinea" => "GUI",
    "Guyana" => "GUY",
    "Haiti" => "HAI",
    "Honduras" => "HON",
    "Hong Kong" => "HKG",
    "Hungary" => "HUN",
    "Iceland" => "ISL",
    "India" => "IND",
    "Indonesia" => "IDN",
    "Iran" => "IRN",
    "Iraq" => "IRQ",
    "Ireland" => "IRL",
    "Israel" => "ISR",
    "Italy" => "ITA",
    "Jamaica" => "JAM",
    "Japan" => "JPN",
    "Jordan" => "JOR",
    "Kazakhstan" => "KAZ",
    "Kenya" => "KEN",
    "Kuwait" => "KUW",
    "Kyrgyzstan" => "KGZ",
    "Laos" => "LAO",
    "Lebanon" => "LBN",
    "Liberia" => "LBR",
    "Libya" => "LBY",
    "Liechtenstein" => "LIE",
    "Luxembourg" => "LUX",
    "Macau" => "MAC",
    "Madagascar" => "MAD",
    "Malaysia" => "MAS",
    "Malta" => "MLT",
    "Mexico" => "MEX",
    "Monaco" => "MON",
    "Mongolia" => "MNG",
    "Morocco" => "MAR",
    "Mozambique" => "MOZ",
    "Namibia" => "NAM",
    "Nepal" => "NEP",
    "Netherlands" => "NLD",
    "New Zealand" => "NZL",
    "Nicaragua" => "NCA",
    "Niger" => "NIG",
    "North Korea" => "PRK",
    "North Macedonia" => "MKD",
    "Norway" => "NOR",
    "Oman" => "OMA",
    "Pakistan" => "PAK",
    "Panama" => "PAN",
    "Papua New Guinea" => "PNG",
    "Paraguay" => "PAR",
    "Peru" => "PER",
    "Philippines" => "PHI",
    "Poland" => "POL",
    "Portugal" => "POR",
    "Puerto Rico" => "PUR",
    "Qatar" => "QAT",
    "Romania" => "ROU",
    "Russia" => "RUS",
    "Rwanda" => "RWA",
    "Saint Lucia" => "LCA",
    "Samoa" => "SAM",
    "San Marino" => "SMR",
    "Saudi Arabia" => "KSA",
    "Senegal" => "SEN",
    "Serbia" => "SRB",
    "Singapore" => "SIN",
    "South Africa" => "RSA",
    "South Korea" => "KOR",
    "Spain" => "ESP",
    "Sri Lanka" => "LKA",
    "Sudan" => "SDN",
    "Suriname" => "SUR",
    "Switzerland" => "SUI",
    "Syria" => "SYR",
    "Chinese Taipei" => "TWN",
    "Tajikistan" => "TJK",
    "Tanzania" => "TAN",
    "Thailand" => "THA",
    "Trinidad and Tobago" => "TRI",
    "Tunisia" => "TUN",
    "Turkey" => "TUR",
    "Uganda" => "UGA",
    "Ukraine" => "UKR",
    "United Arab Emirates" => "UAE",
    "United Kingdom" => "GBR",
    "United States" => "USA",
    "Uruguay" => "URU",
    "Uzbekistan" => "UZB",
    "Venezuela" => "VEN",
    "Vietnam" => "VIE",
    "Zambia" => "ZAM",
    "Zimbabwe" => "ZIM",
};

/// Look up the region code for a catalog country name (exact, case-sensitive).
pub fn region_code_for_country(country: &str) -> Option<&'static str> {
    COUNTRY_CODES.get(country).copied()
}
