use vcsurl::{Field, Flavor, Locator, Resolution, required_fields};

/// What a piece of report text is, independent of how it is colored.
#[derive(Debug, Clone, Copy)]
enum Tone {
    Heading,
    Rule,
    Explicit,
    Value,
    Warning,
    Failure,
    Muted,
}

impl Tone {
    fn sgr(self) -> &'static str {
        match self {
            Tone::Heading => "1;36",
            Tone::Rule => "34",
            Tone::Explicit => "36",
            Tone::Value => "32",
            Tone::Warning => "33",
            Tone::Failure => "31",
            Tone::Muted => "2",
        }
    }
}

struct Painter {
    color: bool,
}

impl Painter {
    fn paint(&self, tone: Tone, text: impl AsRef<str>) -> String {
        if self.color { format!("\x1b[{}m{}\x1b[0m", tone.sgr(), text.as_ref()) } else { text.as_ref().to_string() }
    }

    fn section(&self, title: &str) {
        println!("\n{}", self.paint(Tone::Muted, format!("── {title} ──")));
    }
}

pub fn print_resolution(flavor: &Flavor, res: &Resolution, explicit: bool, color: bool) {
    let p = Painter { color };
    println!("\n{}  {}", p.paint(Tone::Heading, &res.input), p.paint(Tone::Muted, format!("[{}]", flavor.name())));

    p.section("rules");
    print_attempts(&p, res);

    p.section("result");
    match &res.outcome {
        Ok(locator) => print_locator(&p, flavor, locator),
        Err(err) => {
            println!("  {}", p.paint(Tone::Failure, err.to_string()));
            if flavor.is_valid(&res.input, None) {
                println!("  {}", p.paint(Tone::Muted, "part of the input is recognized, but no rule matches all of it"));
            }
        }
    }

    let verdict = if explicit {
        p.paint(Tone::Value, "explicit")
    } else {
        p.paint(Tone::Warning, "not explicit (syntax shared with other tools)")
    };
    println!("\n  {} {verdict}  {} {:?}", p.paint(Tone::Muted, "detection:"), p.paint(Tone::Muted, "in"), res.elapsed);
}

fn print_attempts(p: &Painter, res: &Resolution) {
    if res.attempts.is_empty() {
        println!("  {}", p.paint(Tone::Muted, "no rules registered"));
        return;
    }

    for attempt in &res.attempts {
        let mark = if attempt.matched { p.paint(Tone::Value, "✓") } else { p.paint(Tone::Muted, "·") };
        let explicit = if attempt.explicit { p.paint(Tone::Explicit, " explicit") } else { String::new() };
        println!(
            "  {mark} {} {}{explicit}",
            p.paint(Tone::Rule, &attempt.label),
            p.paint(Tone::Muted, format!("w={}", attempt.weight))
        );
    }
}

fn print_locator(p: &Painter, flavor: &Flavor, locator: &Locator) {
    for field in Field::ALL {
        let Some(value) = locator.get(field) else {
            continue;
        };
        let origin = if locator.defaulted().contains(field.flag()) { " (default)" } else { "" };
        println!("  {:<9} {}{}", format!("{field}:"), p.paint(Tone::Value, value), p.paint(Tone::Muted, origin));
    }

    match flavor.to_url(locator) {
        Ok(url) => println!("\n  {} {}", p.paint(Tone::Muted, "url:"), p.paint(Tone::Heading, url)),
        Err(err) => {
            let needed: Vec<&str> = required_fields(locator).fields().map(Field::as_str).collect();
            println!("\n  {} {}", p.paint(Tone::Muted, "url:"), p.paint(Tone::Warning, err.to_string()));
            println!("  {}", p.paint(Tone::Muted, format!("this shape needs: {}", needed.join(", "))));
        }
    }
}
