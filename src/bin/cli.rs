use chrono::NaiveDate;
use course_planner::{
    ClassDay, CourseCalendar, CourseConfig, CourseSchedule, HourType, export_schedule_to_csv,
    load_config_from_json, save_config_to_json,
};
use polars::prelude::{AnyValue, DataFrame};
use std::io::{self, Write};

fn render_df_as_text_table(df: &DataFrame) -> String {
    let columns = df.get_columns();
    let col_names: Vec<String> = columns.iter().map(|c| c.name().to_string()).collect();

    let format_value = |av: &AnyValue, name: &str| -> String {
        match av {
            AnyValue::Null => String::new(),
            AnyValue::Int32(v) => v.to_string(),
            AnyValue::Int64(v) => v.to_string(),
            AnyValue::Boolean(v) => v.to_string(),
            AnyValue::Float64(v) => {
                if name == "chrono_hours" {
                    format!("{v}")
                } else {
                    format!("{v:.2}")
                }
            }
            AnyValue::String(s) => s.to_string(),
            AnyValue::Date(days) => {
                let epoch = NaiveDate::from_ymd_opt(1970, 1, 1).unwrap();
                (epoch + chrono::Duration::days(*days as i64)).to_string()
            }
            other => other.to_string(),
        }
    };

    // Compute column widths
    let mut widths: Vec<usize> = col_names.iter().map(|n| n.len()).collect();
    for (ci, col) in columns.iter().enumerate() {
        for row_idx in 0..df.height() {
            if let Ok(ref av) = col.get(row_idx) {
                let s = format_value(av, col.name().as_str());
                if s.len() > widths[ci] {
                    widths[ci] = s.len();
                }
            }
        }
    }

    let mut sep = String::new();
    sep.push('+');
    for w in &widths {
        sep.push_str(&"-".repeat(*w + 2));
        sep.push('+');
    }

    let mut out = String::new();
    out.push_str(&sep);
    out.push('\n');

    out.push('|');
    for (i, name) in col_names.iter().enumerate() {
        out.push(' ');
        out.push_str(name);
        let pad = widths[i] - name.len();
        if pad > 0 {
            out.push_str(&" ".repeat(pad));
        }
        out.push(' ');
        out.push('|');
    }
    out.push('\n');
    out.push_str(&sep);
    out.push('\n');

    for row_idx in 0..df.height() {
        out.push('|');
        for (ci, col) in columns.iter().enumerate() {
            let s = col
                .get(row_idx)
                .map(|av| format_value(&av, col.name().as_str()))
                .unwrap_or_default();
            out.push(' ');
            out.push_str(&s);
            let pad = widths[ci].saturating_sub(s.len());
            if pad > 0 {
                out.push_str(&" ".repeat(pad));
            }
            out.push(' ');
            out.push('|');
        }
        out.push('\n');
    }

    out.push_str(&sep);
    out.push('\n');
    out
}

fn print_help() {
    println!(
        "Commands:\n  help                         Show this help\n  show                         Generate and display the schedule\n  summary                      Display end date, weeks and weekly load\n  config                       Display the current configuration\n  name <text...>               Set the course name\n  start <YYYY-MM-DD>           Set the start date\n  day <monday..saturday>       Toggle a class day\n  hours <float>                Set total required hours\n  type <chronological|pedagogical|dgai>\n                               Set the hour-accounting convention\n  session <float>              Set nominal hours per session\n  recovery <count>             Set number of leading recovery sessions\n  exclude <YYYY-MM-DD>         Add a custom excluded date\n  include <YYYY-MM-DD>         Remove a custom excluded date\n  holidays                     List the holiday table\n  save <path>                  Save configuration snapshot (JSON)\n  load <path>                  Load configuration snapshot (JSON)\n  export <path>                Export the schedule as CSV\n  reset                        Restore the default configuration\n  quit|exit                    Exit"
    );
}

fn print_config(config: &CourseConfig) {
    let days = config
        .class_days
        .iter()
        .map(|d| d.as_str())
        .collect::<Vec<_>>()
        .join(", ");
    let excluded = config
        .custom_excluded_dates
        .iter()
        .map(|d| d.to_string())
        .collect::<Vec<_>>()
        .join(", ");
    println!("Course name        : {}", config.course_name);
    println!(
        "Start date         : {}",
        config
            .start_date
            .map(|d| d.to_string())
            .unwrap_or_else(|| "(unset)".to_string())
    );
    println!("Class days         : {}", days);
    println!("Total hours        : {}", config.total_hours);
    println!("Hour type          : {}", config.hour_type.as_str());
    println!("Hours per session  : {}", config.hours_per_session);
    println!("Recovery sessions  : {}", config.recovery_sessions_count);
    println!("Excluded dates     : {}", excluded);
}

fn print_schedule(config: &CourseConfig, calendar: &CourseCalendar) {
    let schedule = CourseSchedule::build_with_calendar(config, calendar);
    if schedule.is_empty() {
        println!("No sessions: set a start date and at least one class day.");
        return;
    }
    match schedule.to_dataframe() {
        Ok(df) => print!("{}", render_df_as_text_table(&df)),
        Err(e) => println!("Error rendering schedule: {}", e),
    }
    if !schedule.target_reached() {
        println!("Warning: hour target not reached within the scan window.");
    }
}

fn print_summary(config: &CourseConfig, calendar: &CourseCalendar) {
    let schedule = CourseSchedule::build_with_calendar(config, calendar);
    match schedule.summary() {
        Some(summary) => {
            println!("Sessions           : {}", summary.total_sessions);
            println!("End date           : {}", summary.end_date);
            println!("Weeks              : {}", summary.weeks);
            println!("Avg hours per week : {:.1}", summary.avg_hours_per_week);
        }
        None => println!("No sessions: set a start date and at least one class day."),
    }
}

fn parse_date(input: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(input, "%Y-%m-%d").ok()
}

fn main() {
    let calendar = CourseCalendar::default();
    let mut config = CourseConfig::default();

    println!("Course Planner (CLI) - type 'help' for commands\n");

    let stdin = io::stdin();
    let mut line = String::new();
    loop {
        print!("> ");
        let _ = io::stdout().flush();
        line.clear();
        if stdin.read_line(&mut line).is_err() || line.is_empty() {
            break;
        }
        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        let mut parts = input.split_whitespace();
        let cmd = parts.next().unwrap_or("");

        match cmd {
            "help" => print_help(),
            "quit" | "exit" => break,
            "show" => print_schedule(&config, &calendar),
            "summary" => print_summary(&config, &calendar),
            "config" => print_config(&config),
            "name" => {
                let rest = input.strip_prefix("name").unwrap_or("").trim();
                config.course_name = rest.to_string();
                println!("Course name set.");
            }
            "start" => match parts.next().and_then(parse_date) {
                Some(date) => {
                    config.start_date = Some(date);
                    println!("Start date set to {}.", date);
                }
                None => println!("Usage: start <YYYY-MM-DD>"),
            },
            "day" => match parts.next().and_then(ClassDay::from_str) {
                Some(day) => {
                    config.toggle_class_day(day);
                    let days = config
                        .class_days
                        .iter()
                        .map(|d| d.as_str())
                        .collect::<Vec<_>>()
                        .join(", ");
                    println!("Class days: {}", days);
                }
                None => println!("Usage: day <monday..saturday> (Sunday is never a class day)"),
            },
            "hours" => match parts.next().and_then(|s| s.parse::<f64>().ok()) {
                Some(value) => {
                    config.total_hours = value;
                    println!("Total hours set to {}.", value);
                }
                None => println!("Usage: hours <float>"),
            },
            "type" => match parts.next() {
                Some(label) => {
                    config.hour_type = HourType::from_label(label);
                    println!("Hour type set to {}.", config.hour_type.as_str());
                }
                None => println!("Usage: type <chronological|pedagogical|dgai>"),
            },
            "session" => match parts.next().and_then(|s| s.parse::<f64>().ok()) {
                Some(value) => {
                    config.hours_per_session = value;
                    println!("Hours per session set to {}.", value);
                }
                None => println!("Usage: session <float>"),
            },
            "recovery" => match parts.next().and_then(|s| s.parse::<u32>().ok()) {
                Some(count) => {
                    config.recovery_sessions_count = count;
                    println!("Recovery sessions set to {}.", count);
                }
                None => println!("Usage: recovery <count>"),
            },
            "exclude" => match parts.next().and_then(parse_date) {
                Some(date) => {
                    config.add_excluded_date(date);
                    println!("Excluded {}.", date);
                }
                None => println!("Usage: exclude <YYYY-MM-DD>"),
            },
            "include" => match parts.next().and_then(parse_date) {
                Some(date) => {
                    config.remove_excluded_date(date);
                    println!("Removed exclusion for {}.", date);
                }
                None => println!("Usage: include <YYYY-MM-DD>"),
            },
            "holidays" => {
                for (date, name) in calendar.holidays() {
                    println!("{}  {}", date, name);
                }
            }
            "save" => match parts.next() {
                Some(path) => match save_config_to_json(&config, path) {
                    Ok(()) => println!("Configuration saved to {}.", path),
                    Err(e) => println!("Error saving configuration: {}", e),
                },
                None => println!("Usage: save <path>"),
            },
            "load" => match parts.next() {
                Some(path) => match load_config_from_json(path) {
                    Ok(loaded) => {
                        config = loaded;
                        println!("Configuration loaded from {}.", path);
                    }
                    Err(e) => println!("Error loading configuration: {}", e),
                },
                None => println!("Usage: load <path>"),
            },
            "export" => match parts.next() {
                Some(path) => {
                    let schedule = CourseSchedule::build_with_calendar(&config, &calendar);
                    match export_schedule_to_csv(schedule.sessions(), &calendar, path) {
                        Ok(()) => println!(
                            "Exported {} sessions to {}.",
                            schedule.sessions().len(),
                            path
                        ),
                        Err(e) => println!("Error exporting schedule: {}", e),
                    }
                }
                None => println!("Usage: export <path>"),
            },
            "reset" => {
                config = CourseConfig::default();
                println!("Configuration reset to defaults.");
            }
            other => println!("Unknown command '{}'. Type 'help' for commands.", other),
        }
    }
}
