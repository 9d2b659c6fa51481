use coffee_orders::{Command, DrinkConfiguration, Session, Size, Topping};
use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

/// Deterministic command generator cycling through sizes, quantities and toppings.
struct CommandGenerator {
    remaining: u32,
    step: u32,
}

impl CommandGenerator {
    fn new(orders: u32) -> Self {
        Self {
            remaining: orders,
            step: 0,
        }
    }
}

impl Iterator for CommandGenerator {
    type Item = Command;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        // five edits per order, then a submit
        let n = self.step;
        self.step += 1;
        let command = match n % 6 {
            0 => Command::ChangeSize(Size::ALL[(n / 6) as usize % 4].name().to_string()),
            1 => Command::SetQuantity(n % 5 + 1),
            2 => Command::AddTopping(Topping::ALL[(n / 6) as usize % 5]),
            3 => Command::AddTopping(Topping::ALL[(n / 7) as usize % 5]),
            4 => Command::RemoveTopping(Topping::ALL[(n / 11) as usize % 5]),
            _ => {
                self.remaining -= 1;
                Command::Submit
            }
        };
        Some(command)
    }
}

fn bench_price(c: &mut Criterion) {
    let mut drink = DrinkConfiguration::new();
    drink.set_size(Size::Venti);
    drink.set_quantity(5).unwrap();
    for topping in Topping::ALL {
        drink.add_topping(topping);
    }

    c.bench_function("price_all_toppings", |b| b.iter(|| black_box(&drink).price()));
}

fn bench_session_replay(c: &mut Criterion) {
    let mut group = c.benchmark_group("session_replay");

    for orders in [1_000u32, 10_000, 100_000] {
        group.bench_with_input(BenchmarkId::from_parameter(orders), &orders, |b, &orders| {
            b.iter(|| {
                let mut session = Session::new();
                for command in CommandGenerator::new(orders) {
                    let _ = black_box(session.apply(command));
                }
                session
            });
        });
    }

    group.finish();
}

fn bench_render(c: &mut Criterion) {
    let mut session = Session::new();
    for command in CommandGenerator::new(1_000) {
        let _ = session.apply(command);
    }

    c.bench_function("render_1k_entries", |b| {
        b.iter(|| {
            for index in 0..session.orders().len() {
                let _ = black_box(session.render_entry(index));
            }
        });
    });
}

criterion_group!(benches, bench_price, bench_session_replay, bench_render);
criterion_main!(benches);
