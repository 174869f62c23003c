fn main() {
    rezgo::app::cli::run();
}
