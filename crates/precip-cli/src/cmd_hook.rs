use std::io::Read;

/// `precip hook` — read stdin, run the stop check, emit the verdict.
///
/// The contract with the host: stdout carries the JSON verdict, stderr plus
/// exit 1 is a non-blocking warning shown to the user. Internal failures
/// never block the session; they degrade to a neutral allow.
pub fn execute() -> anyhow::Result<()> {
    let mut stdin_buf = String::new();
    if std::io::stdin().read_to_string(&mut stdin_buf).is_err() {
        println!("{{}}");
        return Ok(());
    }

    match precip_bridge::hook_entrypoint_from_stdin(&stdin_buf) {
        Ok(result) => {
            if let Some(output) = &result.stdout {
                println!("{output}");
            }
            if let Some(warning) = &result.stderr {
                eprintln!("{warning}");
                // Exit 1 = non-blocking warning; the host shows stderr to
                // the user but does not block the conversation.
                std::process::exit(1);
            }
            Ok(())
        }
        Err(_) => {
            // Neutral allow on internal errors
            println!("{{}}");
            Ok(())
        }
    }
}
