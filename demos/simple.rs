use std::collections::HashMap;

use varsub::Interpolator;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut vars = HashMap::new();
    vars.insert("user".to_string(), "alice".to_string());
    vars.insert("home".to_string(), "/home/alice".to_string());
    vars.insert("shell".to_string(), "/bin/zsh".to_string());

    let interp = Interpolator::new(vars);

    let line = interp.interpolate("${user}:x:1000:1000::${home}:${shell}")?;
    println!("passwd entry: {}", line);

    // Escaped delimiters survive as literal text.
    let doc = interp.interpolate(r"cost is \${price}, user is ${user}")?;
    println!("escaped:      {}", doc);

    // The innermost reference resolves first, so one variable's value can
    // form part of another variable's name.
    let mut layered = HashMap::new();
    layered.insert("env".to_string(), "prod".to_string());
    layered.insert("prod_url".to_string(), "https://api.example.com".to_string());

    let interp = Interpolator::new(layered);
    let url = interp.interpolate("${${env}_url}/v1/users")?;
    println!("layered:      {}", url);

    Ok(())
}
