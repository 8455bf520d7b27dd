//! Print one seeded run as whitespace-separated columns:
//!
//! `t x y heading acc_x acc_y yaw_rate r_0 b_0 ... r_m b_m`
//!
//! Derivative columns are causal: each uses samples up to its own row.
//! Heading starts at the second row, the second-difference columns at the
//! third; missing values print `-`.

use conesim::{SimConfig, Simulation};
use gpoint::GPoint;

fn row(sim: &Simulation, i: usize) -> String {
    let mut line = format!(
        "{} {} {}",
        GPoint(sim.path.t[i]),
        GPoint(sim.path.x[i]),
        GPoint(sim.path.y[i])
    );
    match i.checked_sub(1) {
        Some(k) => line += &format!(" {}", GPoint(sim.imu.heading[k])),
        None => line += " -",
    }
    match i.checked_sub(2) {
        Some(j) => {
            line += &format!(
                " {} {} {}",
                GPoint(sim.imu.acc_x[j]),
                GPoint(sim.imu.acc_y[j]),
                GPoint(sim.imu.yaw_rate[j])
            )
        }
        None => line += " - - -",
    }
    for m in &sim.measurements[i] {
        line += &format!(" {} {}", GPoint(m.r), GPoint(m.t));
    }
    line
}

fn main() {
    let config = SimConfig::default().with_seed(17);
    let sim = match Simulation::run(&config) {
        Ok(sim) => sim,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    for i in 0..sim.path.len() {
        println!("{}", row(&sim, i));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn columns(line: &str) -> Vec<&str> {
        line.split(' ').collect()
    }

    #[test]
    fn test_heading_printed_from_second_row() {
        let sim = Simulation::run(&SimConfig::default().with_seed(1)).unwrap();
        let width = 7 + 2 * sim.cones.len();

        let first = row(&sim, 0);
        let cols = columns(&first);
        assert_eq!(cols.len(), width);
        assert_eq!(&cols[3..7], ["-", "-", "-", "-"]);

        let second = row(&sim, 1);
        let cols = columns(&second);
        assert_eq!(cols.len(), width);
        assert_eq!(cols[3], GPoint(sim.imu.heading[0]).to_string());
        assert_eq!(&cols[4..7], ["-", "-", "-"]);

        let third = row(&sim, 2);
        assert!(columns(&third).iter().all(|c| *c != "-"));
    }
}
