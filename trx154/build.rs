use std::env;
use std::path::PathBuf;

fn main() {
    // (Variable, Type, Default value)
    let configs: [(&str, &str, &str); 1] = [("MAC_BLACKLIST_SIZE", "usize", "8")];

    // Make sure we get rerun if needed
    println!("cargo:rerun-if-changed=build.rs");
    for (name, _, _) in configs.iter() {
        println!("cargo:rerun-if-env-changed=TRX154_{name}");
    }

    let mut data = String::new();
    for (name, ty, default) in configs.iter() {
        let value = env::var(format!("TRX154_{name}")).unwrap_or_else(|_| default.to_string());
        data.push_str(&format!("pub const {name}: {ty} = {value};\n"));
    }

    // Now that we have the code of the configuration, actually write it to a file
    let out_dir = PathBuf::from(env::var_os("OUT_DIR").unwrap());
    let out_file = out_dir.join("config.rs");
    std::fs::write(out_file, data).unwrap();
}
