fn main() {
    prejspy::cli::run();
}
