fn main() {
    slngen::app::cli::run();
}
