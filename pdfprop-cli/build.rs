use clap::CommandFactory;

#[path = "src/cli/combine.rs"]
#[allow(dead_code)]
mod combine;

#[path = "src/cli/extract.rs"]
#[allow(dead_code)]
mod extract;

fn main() -> std::io::Result<()> {
    let out_dir =
        std::path::PathBuf::from(std::env::var_os("OUT_DIR").ok_or(std::io::ErrorKind::NotFound)?);

    render_man(combine::Cli::command(), &out_dir.join("pdfcombine.1"))?;
    render_man(extract::Cli::command(), &out_dir.join("pdfprops.1"))?;

    println!("cargo:rerun-if-changed=src/cli");
    Ok(())
}

fn render_man(cmd: clap::Command, path: &std::path::Path) -> std::io::Result<()> {
    let man = clap_mangen::Man::new(cmd);
    let mut buffer: Vec<u8> = Default::default();
    man.render(&mut buffer)?;
    std::fs::write(path, buffer)
}
