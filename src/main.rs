fn main() {
    dapp::app::cli::run();
}
