fn main() {
    heart_gate::run();
}
