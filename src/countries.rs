use std::collections::HashMap;

/// Continent reported for country codes absent from the table.
pub const UNKNOWN_CONTINENT: &str = "Unknown";

/// Read-only country reference data: ISO 3166-1 alpha-2 code to English short
/// name and continent. Supplied to the extractor as a value so tests can
/// substitute a smaller table.
#[derive(Debug, Clone)]
pub struct CountryTable {
    entries: HashMap<&'static str, (&'static str, &'static str)>,
}

impl CountryTable {
    /// The full ISO 3166-1 alpha-2 assignment list.
    pub fn builtin() -> Self {
        Self::from_entries(COUNTRIES)
    }

    pub fn from_entries(entries: &'static [(&'static str, &'static str, &'static str)]) -> Self {
        Self {
            entries: entries
                .iter()
                .map(|(code, name, continent)| (*code, (*name, *continent)))
                .collect(),
        }
    }

    /// Continent for a country code, [`UNKNOWN_CONTINENT`] when absent.
    pub fn continent_of(&self, code: &str) -> &str {
        self.entries
            .get(code)
            .map(|(_, continent)| *continent)
            .unwrap_or(UNKNOWN_CONTINENT)
    }

    /// English short name, falling back to the code itself (chart labels).
    pub fn name_of<'a>(&self, code: &'a str) -> &'a str {
        self.entries.get(code).map(|(name, _)| *name).unwrap_or(code)
    }
}

#[rustfmt::skip]
static COUNTRIES: &[(&str, &str, &str)] = &[
    ("AD", "Andorra", "Europe"),
    ("AE", "United Arab Emirates", "Asia"),
    ("AF", "Afghanistan", "Asia"),
    ("AG", "Antigua and Barbuda", "North America"),
    ("AI", "Anguilla", "North America"),
    ("AL", "Albania", "Europe"),
    ("AM", "Armenia", "Asia"),
    ("AO", "Angola", "Africa"),
    ("AQ", "Antarctica", "Antarctica"),
    ("AR", "Argentina", "South America"),
    ("AS", "American Samoa", "Oceania"),
    ("AT", "Austria", "Europe"),
    ("AU", "Australia", "Oceania"),
    ("AW", "Aruba", "North America"),
    ("AX", "Aland Islands", "Europe"),
    ("AZ", "Azerbaijan", "Asia"),
    ("BA", "Bosnia and Herzegovina", "Europe"),
    ("BB", "Barbados", "North America"),
    ("BD", "Bangladesh", "Asia"),
    ("BE", "Belgium", "Europe"),
    ("BF", "Burkina Faso", "Africa"),
    ("BG", "Bulgaria", "Europe"),
    ("BH", "Bahrain", "Asia"),
    ("BI", "Burundi", "Africa"),
    ("BJ", "Benin", "Africa"),
    ("BL", "Saint Barthelemy", "North America"),
    ("BM", "Bermuda", "North America"),
    ("BN", "Brunei", "Asia"),
    ("BO", "Bolivia", "South America"),
    ("BQ", "Bonaire, Sint Eustatius and Saba", "North America"),
    ("BR", "Brazil", "South America"),
    ("BS", "Bahamas", "North America"),
    ("BT", "Bhutan", "Asia"),
    ("BV", "Bouvet Island", "Antarctica"),
    ("BW", "Botswana", "Africa"),
    ("BY", "Belarus", "Europe"),
    ("BZ", "Belize", "North America"),
    ("CA", "Canada", "North America"),
    ("CC", "Cocos Islands", "Asia"),
    ("CD", "Democratic Republic of the Congo", "Africa"),
    ("CF", "Central African Republic", "Africa"),
    ("CG", "Congo", "Africa"),
    ("CH", "Switzerland", "Europe"),
    ("CI", "Cote d'Ivoire", "Africa"),
    ("CK", "Cook Islands", "Oceania"),
    ("CL", "Chile", "South America"),
    ("CM", "Cameroon", "Africa"),
    ("CN", "China", "Asia"),
    ("CO", "Colombia", "South America"),
    ("CR", "Costa Rica", "North America"),
    ("CU", "Cuba", "North America"),
    ("CV", "Cabo Verde", "Africa"),
    ("CW", "Curacao", "North America"),
    ("CX", "Christmas Island", "Asia"),
    ("CY", "Cyprus", "Europe"),
    ("CZ", "Czechia", "Europe"),
    ("DE", "Germany", "Europe"),
    ("DJ", "Djibouti", "Africa"),
    ("DK", "Denmark", "Europe"),
    ("DM", "Dominica", "North America"),
    ("DO", "Dominican Republic", "North America"),
    ("DZ", "Algeria", "Africa"),
    ("EC", "Ecuador", "South America"),
    ("EE", "Estonia", "Europe"),
    ("EG", "Egypt", "Africa"),
    ("EH", "Western Sahara", "Africa"),
    ("ER", "Eritrea", "Africa"),
    ("ES", "Spain", "Europe"),
    ("ET", "Ethiopia", "Africa"),
    ("FI", "Finland", "Europe"),
    ("FJ", "Fiji", "Oceania"),
    ("FK", "Falkland Islands", "South America"),
    ("FM", "Micronesia", "Oceania"),
    ("FO", "Faroe Islands", "Europe"),
    ("FR", "France", "Europe"),
    ("GA", "Gabon", "Africa"),
    ("GB", "United Kingdom", "Europe"),
    ("GD", "Grenada", "North America"),
    ("GE", "Georgia", "Asia"),
    ("GF", "French Guiana", "South America"),
    ("GG", "Guernsey", "Europe"),
    ("GH", "Ghana", "Africa"),
    ("GI", "Gibraltar", "Europe"),
    ("GL", "Greenland", "North America"),
    ("GM", "Gambia", "Africa"),
    ("GN", "Guinea", "Africa"),
    ("GP", "Guadeloupe", "North America"),
    ("GQ", "Equatorial Guinea", "Africa"),
    ("GR", "Greece", "Europe"),
    ("GS", "South Georgia and the South Sandwich Islands", "Antarctica"),
    ("GT", "Guatemala", "North America"),
    ("GU", "Guam", "Oceania"),
    ("GW", "Guinea-Bissau", "Africa"),
    ("GY", "Guyana", "South America"),
    ("HK", "Hong Kong", "Asia"),
    ("HM", "Heard Island and McDonald Islands", "Antarctica"),
    ("HN", "Honduras", "North America"),
    ("HR", "Croatia", "Europe"),
    ("HT", "Haiti", "North America"),
    ("HU", "Hungary", "Europe"),
    ("ID", "Indonesia", "Asia"),
    ("IE", "Ireland", "Europe"),
    ("IL", "Israel", "Asia"),
    ("IM", "Isle of Man", "Europe"),
    ("IN", "India", "Asia"),
    ("IO", "British Indian Ocean Territory", "Asia"),
    ("IQ", "Iraq", "Asia"),
    ("IR", "Iran", "Asia"),
    ("IS", "Iceland", "Europe"),
    ("IT", "Italy", "Europe"),
    ("JE", "Jersey", "Europe"),
    ("JM", "Jamaica", "North America"),
    ("JO", "Jordan", "Asia"),
    ("JP", "Japan", "Asia"),
    ("KE", "Kenya", "Africa"),
    ("KG", "Kyrgyzstan", "Asia"),
    ("KH", "Cambodia", "Asia"),
    ("KI", "Kiribati", "Oceania"),
    ("KM", "Comoros", "Africa"),
    ("KN", "Saint Kitts and Nevis", "North America"),
    ("KP", "North Korea", "Asia"),
    ("KR", "South Korea", "Asia"),
    ("KW", "Kuwait", "Asia"),
    ("KY", "Cayman Islands", "North America"),
    ("KZ", "Kazakhstan", "Asia"),
    ("LA", "Laos", "Asia"),
    ("LB", "Lebanon", "Asia"),
    ("LC", "Saint Lucia", "North America"),
    ("LI", "Liechtenstein", "Europe"),
    ("LK", "Sri Lanka", "Asia"),
    ("LR", "Liberia", "Africa"),
    ("LS", "Lesotho", "Africa"),
    ("LT", "Lithuania", "Europe"),
    ("LU", "Luxembourg", "Europe"),
    ("LV", "Latvia", "Europe"),
    ("LY", "Libya", "Africa"),
    ("MA", "Morocco", "Africa"),
    ("MC", "Monaco", "Europe"),
    ("MD", "Moldova", "Europe"),
    ("ME", "Montenegro", "Europe"),
    ("MF", "Saint Martin", "North America"),
    ("MG", "Madagascar", "Africa"),
    ("MH", "Marshall Islands", "Oceania"),
    ("MK", "North Macedonia", "Europe"),
    ("ML", "Mali", "Africa"),
    ("MM", "Myanmar", "Asia"),
    ("MN", "Mongolia", "Asia"),
    ("MO", "Macao", "Asia"),
    ("MP", "Northern Mariana Islands", "Oceania"),
    ("MQ", "Martinique", "North America"),
    ("MR", "Mauritania", "Africa"),
    ("MS", "Montserrat", "North America"),
    ("MT", "Malta", "Europe"),
    ("MU", "Mauritius", "Africa"),
    ("MV", "Maldives", "Asia"),
    ("MW", "Malawi", "Africa"),
    ("MX", "Mexico", "North America"),
    ("MY", "Malaysia", "Asia"),
    ("MZ", "Mozambique", "Africa"),
    ("NA", "Namibia", "Africa"),
    ("NC", "New Caledonia", "Oceania"),
    ("NE", "Niger", "Africa"),
    ("NF", "Norfolk Island", "Oceania"),
    ("NG", "Nigeria", "Africa"),
    ("NI", "Nicaragua", "North America"),
    ("NL", "Netherlands", "Europe"),
    ("NO", "Norway", "Europe"),
    ("NP", "Nepal", "Asia"),
    ("NR", "Nauru", "Oceania"),
    ("NU", "Niue", "Oceania"),
    ("NZ", "New Zealand", "Oceania"),
    ("OM", "Oman", "Asia"),
    ("PA", "Panama", "North America"),
    ("PE", "Peru", "South America"),
    ("PF", "French Polynesia", "Oceania"),
    ("PG", "Papua New Guinea", "Oceania"),
    ("PH", "Philippines", "Asia"),
    ("PK", "Pakistan", "Asia"),
    ("PL", "Poland", "Europe"),
    ("PM", "Saint Pierre and Miquelon", "North America"),
    ("PN", "Pitcairn", "Oceania"),
    ("PR", "Puerto Rico", "North America"),
    ("PS", "Palestine", "Asia"),
    ("PT", "Portugal", "Europe"),
    ("PW", "Palau", "Oceania"),
    ("PY", "Paraguay", "South America"),
    ("QA", "Qatar", "Asia"),
    ("RE", "Reunion", "Africa"),
    ("RO", "Romania", "Europe"),
    ("RS", "Serbia", "Europe"),
    ("RU", "Russia", "Europe"),
    ("RW", "Rwanda", "Africa"),
    ("SA", "Saudi Arabia", "Asia"),
    ("SB", "Solomon Islands", "Oceania"),
    ("SC", "Seychelles", "Africa"),
    ("SD", "Sudan", "Africa"),
    ("SE", "Sweden", "Europe"),
    ("SG", "Singapore", "Asia"),
    ("SH", "Saint Helena", "Africa"),
    ("SI", "Slovenia", "Europe"),
    ("SJ", "Svalbard and Jan Mayen", "Europe"),
    ("SK", "Slovakia", "Europe"),
    ("SL", "Sierra Leone", "Africa"),
    ("SM", "San Marino", "Europe"),
    ("SN", "Senegal", "Africa"),
    ("SO", "Somalia", "Africa"),
    ("SR", "Suriname", "South America"),
    ("SS", "South Sudan", "Africa"),
    ("ST", "Sao Tome and Principe", "Africa"),
    ("SV", "El Salvador", "North America"),
    ("SX", "Sint Maarten", "North America"),
    ("SY", "Syria", "Asia"),
    ("SZ", "Eswatini", "Africa"),
    ("TC", "Turks and Caicos Islands", "North America"),
    ("TD", "Chad", "Africa"),
    ("TF", "French Southern Territories", "Antarctica"),
    ("TG", "Togo", "Africa"),
    ("TH", "Thailand", "Asia"),
    ("TJ", "Tajikistan", "Asia"),
    ("TK", "Tokelau", "Oceania"),
    ("TL", "Timor-Leste", "Asia"),
    ("TM", "Turkmenistan", "Asia"),
    ("TN", "Tunisia", "Africa"),
    ("TO", "Tonga", "Oceania"),
    ("TR", "Turkey", "Asia"),
    ("TT", "Trinidad and Tobago", "North America"),
    ("TV", "Tuvalu", "Oceania"),
    ("TW", "Taiwan", "Asia"),
    ("TZ", "Tanzania", "Africa"),
    ("UA", "Ukraine", "Europe"),
    ("UG", "Uganda", "Africa"),
    ("UM", "United States Minor Outlying Islands", "Oceania"),
    ("US", "United States", "North America"),
    ("UY", "Uruguay", "South America"),
    ("UZ", "Uzbekistan", "Asia"),
    ("VA", "Holy See", "Europe"),
    ("VC", "Saint Vincent and the Grenadines", "North America"),
    ("VE", "Venezuela", "South America"),
    ("VG", "British Virgin Islands", "North America"),
    ("VI", "U.S. Virgin Islands", "North America"),
    ("VN", "Vietnam", "Asia"),
    ("VU", "Vanuatu", "Oceania"),
    ("WF", "Wallis and Futuna", "Oceania"),
    ("WS", "Samoa", "Oceania"),
    ("YE", "Yemen", "Asia"),
    ("YT", "Mayotte", "Africa"),
    ("ZA", "South Africa", "Africa"),
    ("ZM", "Zambia", "Africa"),
    ("ZW", "Zimbabwe", "Africa"),
];
