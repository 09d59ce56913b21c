use crate::batch::Threads;

pub fn parse_iteration_modifier(input: &str) -> Result<f64, String> {
    let value: f64 = input
        .parse()
        .map_err(|_| format!("Invalid iteration modifier: {input}"))?;

    if !value.is_finite() || value <= 0.0 {
        return Err(String::from("Iteration modifier must be a positive number"));
    }

    Ok(value)
}

pub fn parse_tolerance(input: &str) -> Result<f64, String> {
    let value: f64 = input
        .parse()
        .map_err(|_| format!("Invalid tolerance: {input}"))?;

    if value.is_nan() || value < 0.0 {
        return Err(String::from("Tolerance must be a non-negative number"));
    }

    Ok(value)
}

pub fn parse_threads(input: &str) -> Result<Threads, String> {
    if input.eq_ignore_ascii_case("auto") {
        return Ok(Threads::Auto);
    }

    match input.parse::<usize>() {
        Ok(0) | Err(_) => Err(format!(
            "Invalid thread count: {input} (expected \"auto\" or a positive number)"
        )),
        Ok(1) => Ok(Threads::Single),
        Ok(threads) => Ok(Threads::Multi(threads)),
    }
}
