use std::ops::Range;
use std::thread;

use puzzle_kit::parsing::{
    InputBlock, parse_lines_with_offset, parse_with_context, split_two_sections,
};
use puzzle_kit::runner::puzzle_runner;
use puzzle_kit::{DynamicResult, ParseData, PartOne, PartTwo, Solution};

#[puzzle_runner(
    title = "Day 5: If You Give A Seed A Fertilizer",
    parsed = Almanac,
    part_one = Day05,
    part_two = Day05,
    answer_one = "424490994",
    answer_two = "15290096"
)]
impl super::AdventOfCode2023<5> {}

#[derive(thiserror::Error, Debug)]
enum AlmanacError {
    #[error("expected \"seeds: <numbers>\", found {0:?}")]
    InvalidSeeds(String),

    #[error("expected a map header like \"seed-to-soil map:\", found {0:?}")]
    InvalidHeader(String),

    #[error("expected \"<destination start> <source start> <length>\", found {0:?}")]
    InvalidRange(String),

    #[error("seed ranges need a start and a length, found {0} numbers")]
    UnpairedSeeds(usize),

    #[error("mapped value overflowed")]
    Overflow,

    #[error("no seeds to plant")]
    NoSeeds,

    #[error("seed scan worker {0} panicked")]
    WorkerPanicked(u64),
}

/*
Input is an almanac. The first block lists seed numbers:

```text
seeds: 79 14 55 13
```

Each following block is a map from one category to the next (seed to soil, soil to fertilizer, and
so on until location). A map line `destination source length` sends source numbers
`source..source + length` to the same offsets from `destination`. Numbers not covered by any line
map to themselves.
*/

#[derive(Debug, Clone, Copy)]
struct MapRange {
    destination: u64,
    source: u64,
    length: u64,
}

struct AlmanacMap {
    name: String,
    /// Sorted by source start.
    ranges: Vec<MapRange>,
}

impl AlmanacMap {
    fn parse(block: &InputBlock) -> DynamicResult<Self> {
        let (header, body) = block.text.split_once('\n').unwrap_or((block.text, ""));
        let name = header
            .trim()
            .strip_suffix(" map:")
            .ok_or_else(|| AlmanacError::InvalidHeader(header.to_owned()))?;

        let parse_range = |_: usize, line: &str| -> DynamicResult<_> {
            let numbers = line
                .split_whitespace()
                .map(parse_with_context::<u64>)
                .collect::<Result<Vec<_>, _>>()?;
            let &[destination, source, length] = numbers.as_slice() else {
                return Err(AlmanacError::InvalidRange(line.to_owned()).into());
            };
            Ok(MapRange {
                destination,
                source,
                length,
            })
        };
        let mut ranges = parse_lines_with_offset(body, block.line_offset + 1, parse_range)
            .collect::<Result<Vec<_>, _>>()?;
        ranges.sort_unstable_by_key(|range| range.source);

        Ok(Self {
            name: name.to_owned(),
            ranges,
        })
    }

    /// Map a number to the next category.
    ///
    /// Also returns the span: how many consecutive numbers starting at `value` map by the same
    /// offset. The span is always at least one.
    fn map(&self, value: u64) -> Result<(u64, u64), AlmanacError> {
        let next = self.ranges.partition_point(|range| range.source <= value);
        if let Some(range) = next.checked_sub(1).map(|index| &self.ranges[index])
            && value - range.source < range.length
        {
            let offset = value - range.source;
            let mapped = range
                .destination
                .checked_add(offset)
                .ok_or(AlmanacError::Overflow)?;
            return Ok((mapped, range.length - offset));
        }
        // unmapped numbers keep their value until the next range starts
        let span = self
            .ranges
            .get(next)
            .map_or(u64::MAX, |range| range.source - value);
        Ok((value, span))
    }
}

struct Almanac {
    seeds: Vec<u64>,
    maps: Vec<AlmanacMap>,
}

impl ParseData for Almanac {
    fn parse(input: &str) -> DynamicResult<Self> {
        let (seeds, map_blocks) = split_two_sections(input, "seeds", "maps")?;
        let seeds = seeds
            .text
            .trim()
            .strip_prefix("seeds:")
            .ok_or_else(|| AlmanacError::InvalidSeeds(seeds.text.to_owned()))?
            .split_whitespace()
            .map(parse_with_context::<u64>)
            .collect::<Result<_, _>>()?;
        let maps = map_blocks
            .iter()
            .map(AlmanacMap::parse)
            .collect::<DynamicResult<_>>()?;
        Ok(Self { seeds, maps })
    }
}

impl Almanac {
    /// The location of a seed, and the span of following seeds whose locations increase one by one
    /// from it.
    fn location(&self, seed: u64) -> Result<(u64, u64), AlmanacError> {
        self.maps
            .iter()
            .try_fold((seed, u64::MAX), |(value, span), map| {
                let (mapped, map_span) = map.map(value)?;
                tracing::trace!(map = %map.name, value, mapped, "mapped");
                Ok((mapped, span.min(map_span)))
            })
    }

    /// Scan every seed in the slices for the lowest location.
    ///
    /// Within a span the lowest location is the first, so the scan steps from span to span.
    fn lowest_location(
        &self,
        slices: &[Range<u64>],
        worker: u64,
    ) -> Result<Option<u64>, AlmanacError> {
        let mut lowest = None;
        for slice in slices {
            let mut seed = slice.start;
            let mut spans = 0u64;
            while seed < slice.end {
                let (location, span) = self.location(seed)?;
                lowest = lowest.into_iter().chain([location]).min();
                seed = seed.saturating_add(span);
                spans += 1;
            }
            tracing::debug!(
                worker,
                start = slice.start,
                end = slice.end,
                spans,
                "scanned seeds"
            );
        }
        Ok(lowest)
    }
}

/*
For part 1, find the lowest location of any listed seed.
*/

struct Day05;

impl Solution<PartOne> for Day05 {
    type Input = Almanac;
    type Output = u64;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        let locations = input
            .seeds
            .iter()
            .map(|&seed| input.location(seed).map(|(location, _)| location))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(locations.into_iter().min().ok_or(AlmanacError::NoSeeds)?)
    }
}

/*
For part 2, the seed numbers come in pairs: the start of a range of seeds and its length. Find the
lowest location of any seed in any range.

The scan is split across a fixed set of worker threads. Each range is cut into equal parts, one per
worker, and the lowest of the workers' results wins.
*/

const WORKERS: u64 = 5;

/// The part of a seed range scanned by one worker.
fn worker_slice(start: u64, length: u64, worker: u64) -> Range<u64> {
    let part = length.div_ceil(WORKERS);
    let begin = (worker * part).min(length);
    let end = ((worker + 1) * part).min(length);
    start.saturating_add(begin)..start.saturating_add(end)
}

impl Solution<PartTwo> for Day05 {
    type Input = Almanac;
    type Output = u64;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        if input.seeds.len() % 2 != 0 {
            return Err(AlmanacError::UnpairedSeeds(input.seeds.len()).into());
        }
        let ranges: Vec<(u64, u64)> = input
            .seeds
            .chunks_exact(2)
            .map(|pair| (pair[0], pair[1]))
            .collect();

        let lowest = thread::scope(|scope| -> Result<Option<u64>, AlmanacError> {
            let handles: Vec<_> = (0..WORKERS)
                .map(|worker| {
                    let slices: Vec<_> = ranges
                        .iter()
                        .map(|&(start, length)| worker_slice(start, length, worker))
                        .collect();
                    scope.spawn(move || input.lowest_location(&slices, worker))
                })
                .collect();

            let mut lowest = None;
            for (worker, handle) in (0..).zip(handles) {
                let found = handle
                    .join()
                    .map_err(|_| AlmanacError::WorkerPanicked(worker))??;
                tracing::debug!(worker, ?found, "worker finished");
                lowest = lowest.into_iter().chain(found).min();
            }
            Ok(lowest)
        })?;

        Ok(lowest.ok_or(AlmanacError::NoSeeds)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE_INPUT: &str = "\
seeds: 79 14 55 13

seed-to-soil map:
50 98 2
52 50 48

soil-to-fertilizer map:
0 15 37
37 52 2
39 0 15

fertilizer-to-water map:
49 53 8
0 11 42
42 0 7
57 7 4

water-to-light map:
88 18 7
18 25 70

light-to-temperature map:
45 77 23
81 45 19
68 64 13

temperature-to-humidity map:
0 69 1
1 0 69

humidity-to-location map:
60 56 37
56 93 4
";

    #[test]
    fn part_one_solves_example() -> DynamicResult<()> {
        let parsed = Almanac::parse(EXAMPLE_INPUT)?;
        assert_eq!(<Day05 as Solution<PartOne>>::solve(&parsed)?, 35);
        Ok(())
    }

    #[test]
    fn part_two_solves_example() -> DynamicResult<()> {
        let parsed = Almanac::parse(EXAMPLE_INPUT)?;
        assert_eq!(<Day05 as Solution<PartTwo>>::solve(&parsed)?, 46);
        Ok(())
    }

    #[test]
    fn seeds_map_through_every_category() -> DynamicResult<()> {
        let parsed = Almanac::parse(EXAMPLE_INPUT)?;
        let locations: Vec<u64> = parsed
            .seeds
            .iter()
            .map(|&seed| parsed.location(seed).map(|(location, _)| location))
            .collect::<Result<_, _>>()?;
        assert_eq!(locations, vec![82, 43, 86, 35]);
        Ok(())
    }

    #[test]
    fn worker_overflow_fails_part_two() -> DynamicResult<()> {
        let map = "seed-to-soil map:\n18446744073709551615 0 5\n";
        let parsed = Almanac::parse(&format!("seeds: 0 1\n\n{map}"))?;
        assert_eq!(<Day05 as Solution<PartTwo>>::solve(&parsed)?, u64::MAX);

        // seeds 3 and 4 map past the largest location, one in each of the first two workers
        let parsed = Almanac::parse(&format!("seeds: 3 2\n\n{map}"))?;
        let error = <Day05 as Solution<PartTwo>>::solve(&parsed).err();
        assert!(matches!(
            error.as_deref().and_then(|error| error.downcast_ref::<AlmanacError>()),
            Some(AlmanacError::Overflow)
        ));
        Ok(())
    }

    #[test]
    fn worker_slices_cover_the_range_once() {
        for length in [0, 3, 13, 14, 100] {
            let slices: Vec<_> = (0..WORKERS)
                .map(|worker| worker_slice(10, length, worker))
                .collect();
            assert_eq!(slices[0].start, 10);
            assert_eq!(slices[slices.len() - 1].end, 10 + length);
            assert!(slices.windows(2).all(|pair| pair[0].end == pair[1].start));
        }
    }
}
