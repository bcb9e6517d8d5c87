fn main() {
    portfolio_page::start();
}
