//! Display-name corrections for the render layer.
//!
//! The exchange feed reports long company names ("RELIANCE INDUSTRIES LTD")
//! while every downstream surface wants the tradable symbol ("RELIANCE").
//! This is a read-only artifact loaded once; the core never touches it,
//! and grouping and ranking always key on the raw instrument id.

/// Feed display name -> clean tradable symbol.
pub const TICKER_CORRECTIONS: &[(&str, &str)] = &[
    ("RELIANCE INDUSTRIES LTD", "RELIANCE"),
    ("TATA MOTORS LIMITED", "TATAMOTORS"),
    ("STATE BANK OF INDIA", "SBIN"),
    ("HDFC BANK LTD", "HDFCBANK"),
    ("ICICI BANK LTD.", "ICICIBANK"),
    ("INDUSIND BANK LIMITED", "INDUSINDBK"),
    ("AXIS BANK LIMITED", "AXISBANK"),
    ("KOTAK MAHINDRA BANK LTD", "KOTAKBANK"),
    ("INFOSYS LIMITED", "INFY"),
    ("TATA CONSULTANCY SERV LT", "TCS"),
    ("HCL TECHNOLOGIES LTD", "HCLTECH"),
    ("WIPRO LTD", "WIPRO"),
    ("TECH MAHINDRA LIMITED", "TECHM"),
    ("LARSEN & TOUBRO LTD.", "LT"),
    ("BHARTI AIRTEL LIMITED", "BHARTIARTL"),
    ("ITC LTD", "ITC"),
    ("HINDUSTAN UNILEVER LTD.", "HINDUNILVR"),
    ("MARUTI SUZUKI INDIA LTD.", "MARUTI"),
    ("MAHINDRA & MAHINDRA LTD", "M_M"),
    ("BAJAJ FINANCE LIMITED", "BAJFINANCE"),
    ("BAJAJ FINSERV LTD.", "BAJAJFINSV"),
    ("SUN PHARMACEUTICAL IND L", "SUNPHARMA"),
    ("DR. REDDY S LABORATORIES", "DRREDDY"),
    ("CIPLA LTD", "CIPLA"),
    ("TATA STEEL LIMITED", "TATASTEEL"),
    ("JSW STEEL LIMITED", "JSWSTEEL"),
    ("HINDALCO  INDUSTRIES  LTD", "HINDALCO"),
    ("COAL INDIA LTD", "COALINDIA"),
    ("NTPC LTD", "NTPC"),
    ("POWER GRID CORP. LTD.", "POWERGRID"),
    ("OIL AND NATURAL GAS CORP.", "ONGC"),
    ("ADANI ENTERPRISES LIMITED", "ADANIENT"),
    ("ADANI PORT & SEZ LTD", "ADANIPORTS"),
    ("TITAN COMPANY LIMITED", "TITAN"),
    ("ASIAN PAINTS LIMITED", "ASIANPAINT"),
    ("ULTRATECH CEMENT LIMITED", "ULTRACEMCO"),
    ("EICHER MOTORS LTD", "EICHERMOT"),
    ("HERO MOTOCORP LIMITED", "HEROMOTOCO"),
    ("BAJAJ AUTO LIMITED", "BAJAJ-AUTO"),
    ("NESTLE INDIA LIMITED", "NESTLEIND"),
    ("INTERGLOBE AVIATION LTD", "INDIGO"),
    ("INDIAN RAIL TOUR CORP LTD", "IRCTC"),
    ("VODAFONE IDEA LIMITED", "IDEA"),
    ("YES BANK LIMITED", "YESBANK"),
    ("ONE 97 COMMUNICATIONS LTD", "PAYTM"),
    ("SUZLON ENERGY LIMITED", "SUZLON"),
    ("BHARAT ELECTRONICS LTD", "BEL"),
    ("HINDUSTAN AERONAUTICS LTD", "HAL"),
];

/// Resolve a feed display name to its tradable symbol.
/// Unknown names pass through unchanged (the feed already reports the
/// symbol for most F&O instruments).
pub fn clean_symbol(display_name: &str) -> &str {
    TICKER_CORRECTIONS
        .iter()
        .find(|(long, _)| *long == display_name)
        .map(|(_, short)| *short)
        .unwrap_or(display_name)
}
