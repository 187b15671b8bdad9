use bf2js::{Settings, compile};

fn main() {
    // Classic "Hello World!" in Brainfuck
    let code = b"++++++++[>++++[>++>+++>+++>+<<<<-]>+>+>->>+[<]<-]>>.>---.+++++++..+++.>>.<-.<.+++.------.--------.>>+.>++.";

    let settings = Settings {
        tape_size: 1024,
        ..Settings::default()
    };

    match compile(code, &settings) {
        Ok(script) => print!("{script}"),
        Err(err) => eprintln!("translation failed: {err}"),
    }
}
