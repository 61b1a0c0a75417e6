fn main() {
    womecare::run();
}
