#[cfg(all(feature = "web"))]
pub fn pad2(n: i32) -> String {
    if n < 10 {
        format!("0{}", n)
    } else {
        n.to_string()
    }
}

#[cfg(all(feature = "web"))]
pub fn format_local(rfc3339: &str) -> String {
    use js_sys::Date;
    let d = Date::new(&wasm_bindgen::JsValue::from_str(rfc3339));
    if d.get_time().is_nan() {
        return rfc3339.to_string();
    }
    let day = d.get_date() as i32;
    let month = (d.get_month() as i32) + 1;
    let year = d.get_full_year() as i32;
    let hour = d.get_hours() as i32;
    let minute = d.get_minutes() as i32;
    format!(
        "{}.{}.{} {}:{}",
        pad2(day),
        pad2(month),
        year,
        pad2(hour),
        pad2(minute)
    )
}

#[cfg(not(all(feature = "web")))]
pub fn format_local(rfc3339: &str) -> String {
    rfc3339.to_string()
}

/// 1234567 -> "1,234,567"
pub fn format_count(n: i64) -> String {
    let negative = n < 0;
    let digits = n.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    if negative {
        format!("-{}", out)
    } else {
        out
    }
}

/// Compact magnitude for headline tiles: 4200000 -> "4.2M".
pub fn format_compact(n: i64) -> String {
    let abs = n.abs() as f64;
    if abs >= 1_000_000_000.0 {
        format!("{:.1}B", n as f64 / 1_000_000_000.0)
    } else if abs >= 1_000_000.0 {
        format!("{:.1}M", n as f64 / 1_000_000.0)
    } else if abs >= 1_000.0 {
        format!("{:.1}K", n as f64 / 1_000.0)
    } else {
        n.to_string()
    }
}

pub fn format_km(v: f64) -> String {
    format!("{} km", v.round() as i64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_get_thousand_separators() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1_000), "1,000");
        assert_eq!(format_count(1_234_567), "1,234,567");
        assert_eq!(format_count(-45_000), "-45,000");
    }

    #[test]
    fn compact_picks_the_right_magnitude() {
        assert_eq!(format_compact(950), "950");
        assert_eq!(format_compact(4_200_000), "4.2M");
        assert_eq!(format_compact(1_500), "1.5K");
        assert_eq!(format_compact(2_000_000_000), "2.0B");
    }

    #[test]
    fn km_rounds_to_whole_units() {
        assert_eq!(format_km(623.4), "623 km");
        assert_eq!(format_km(623.6), "624 km");
    }
}
