use super::*;

/// "--poll-time-ms" -> "poll_time_ms"
fn transform_arg_name(arg_name: &str) -> String {
    arg_name.trim_start_matches('-').replace('-', "_")
}

struct Arg {
    index: usize,
    name: String,
    values: Vec<String>,
}

fn parse_list(args: &[String]) -> Result<Vec<Arg>, Box<dyn Error>> {
    let mut parsed: Vec<Arg> = Vec::new();
    for (i, arg) in args.iter().enumerate() {
        if i == 0 {
            if arg.starts_with('-') {
                return Err(format!(
                    "first command line argument {} starts with \"-\", {}",
                    arg, "it should have been the program name"
                )
                .into());
            }
        } else if arg.starts_with('-') {
            parsed.push(Arg {
                index: i,
                name: arg.to_owned(),
                values: Vec::new(),
            });
        } else if let Some(last) = parsed.last_mut() {
            last.values.push(arg.to_owned());
        } else {
            return Err(format!(
                "command line argument {} is a value not an --option-name",
                arg
            )
            .into());
        }
    }
    Ok(parsed)
}

pub fn parse_args(builder: &mut ConfigBuilder, args: Vec<String>) -> Result<(), Box<dyn Error>> {
    for arg in parse_list(&args)? {
        if arg.values.len() > 1 {
            return Err(format!(
                "command line argument {} has multiple values: {}",
                arg.index,
                arg.values.join(" ")
            )
            .into());
        }
        let name = transform_arg_name(&arg.name);
        let source = format!("{} command line argument", arg.name);
        match builder.entry(&name) {
            Some(entry) => entry.set_from_arg(arg.values.first().map(String::as_str), source)?,
            None => {
                return Err(format!("{} is not a valid command line option", arg.name).into())
            }
        }
    }
    Ok(())
}
