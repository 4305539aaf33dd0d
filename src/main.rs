use std::io::{self, BufRead, Write};

use vardoku::{Grid, GridSize};

fn main() -> io::Result<()> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    println!("Welcome to the interactive sudoku solver!");
    println!("Choose a grid size:");
    println!("1. 4x4\n2. 9x9\n3. 16x16");

    let size = loop {
        let choice = read_number(&mut lines, "Enter your choice (1-3): ")?;
        match choice {
            Some(1) => break GridSize::new(4).unwrap(),
            Some(2) => break GridSize::new(9).unwrap(),
            Some(3) => break GridSize::new(16).unwrap(),
            _ => println!("Invalid choice! Please select a number between 1 and 3."),
        }
    };

    println!("\nWould you like to enter a puzzle or generate a random one?");
    println!("1. Enter manually\n2. Generate random puzzle");
    let mut grid = loop {
        match read_number(&mut lines, "Your choice: ")? {
            Some(1) => break read_grid(&mut lines, size)?,
            Some(2) => {
                let grid = Grid::generate(size);
                println!("Random puzzle generated! Here is your board:");
                print!("{}", grid);
                break grid;
            }
            _ => println!("Invalid choice! Please select 1 or 2."),
        }
    };

    loop {
        println!("\nChoose an option:");
        println!("1. Solve the sudoku\n2. Get a hint\n3. Exit");
        match read_number(&mut lines, "Your choice: ")? {
            Some(1) => {
                if grid.solve() {
                    println!("Sudoku solved! Here is the solution:");
                    print!("{}", grid);
                } else {
                    println!("No solution exists for the given sudoku.");
                }
                break;
            }
            Some(2) => {
                if grid.hint() {
                    println!("Filled in one empty cell:");
                } else {
                    println!("No hint available.");
                }
                print!("{}", grid);
            }
            Some(3) => {
                println!("Exiting. Thanks for playing!");
                break;
            }
            _ => println!("Invalid choice! Please select a valid option."),
        }
    }
    Ok(())
}

type Lines<'a> = io::Lines<io::StdinLock<'a>>;

fn read_number(lines: &mut Lines<'_>, prompt: &str) -> io::Result<Option<u8>> {
    print!("{}", prompt);
    io::stdout().flush()?;
    match lines.next() {
        Some(line) => Ok(line?.trim().parse().ok()),
        None => Err(io::Error::new(io::ErrorKind::UnexpectedEof, "stdin closed")),
    }
}

// read a puzzle one row per line, 0 or . for empty cells
fn read_grid(lines: &mut Lines<'_>, size: GridSize) -> io::Result<Grid> {
    println!(
        "Enter the puzzle one row per line, {} values each, 0 or . for empty cells.",
        size.get()
    );
    'entry: loop {
        let mut grid = Grid::empty(size);
        for row in 0..size.get() {
            print!("Row {}: ", row + 1);
            io::stdout().flush()?;
            let line = match lines.next() {
                Some(line) => line?,
                None => {
                    return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "stdin closed"))
                }
            };

            let values: Vec<u8> = match parse_row(&line, size) {
                Some(values) => values,
                None => {
                    println!(
                        "Invalid row! Expected {} values between 0 and {}. Starting over.",
                        size.get(),
                        size.get()
                    );
                    continue 'entry;
                }
            };
            for (col, &num) in values.iter().enumerate() {
                // values are range checked in parse_row
                grid.set(row, col as u8, num).unwrap();
            }
        }
        return Ok(grid);
    }
}

fn parse_row(line: &str, size: GridSize) -> Option<Vec<u8>> {
    let values = line
        .split_whitespace()
        .map(|token| match token {
            "." | "_" => Some(0),
            _ => token.parse().ok().filter(|&num| num <= size.get()),
        })
        .collect::<Option<Vec<u8>>>()?;
    if values.len() == size.get() as usize {
        Some(values)
    } else {
        None
    }
}
