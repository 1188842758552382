use varsub::{EnvResolver, FunctionResolver, InterpError, Interpolator, Value, VarFormat};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Mustache-style delimiters with a caret escape.
    let resolver = FunctionResolver::new(|name| match name {
        "version" => Ok(Value::from(env!("CARGO_PKG_VERSION"))),
        "answer" => Ok(Value::display(42)),
        other => Err(InterpError::unknown_variable(other)),
    });

    let interp = Interpolator::with_format(resolver, VarFormat::new("{{", "}}", b'^'));

    println!("{}", interp.interpolate("varsub {{version}}, answer={{answer}}")?);
    println!("{}", interp.interpolate("literal: ^{{not a variable}}")?);

    // Environment-backed resolution with the standard format.
    let interp = Interpolator::new(EnvResolver);
    match interp.interpolate("your path is ${PATH}") {
        Ok(line) => println!("{}", line),
        Err(err) => println!("PATH not set: {}", err),
    }

    Ok(())
}
