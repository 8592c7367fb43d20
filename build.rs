use std::env;
use std::process::Command;

// CPU features that gate the SIMD kernel modules.
#[derive(PartialEq, Eq, Debug)]
struct CpuFeature {
    name: &'static str,
    /// Alternate spellings used by the OS feature listing (Linux reports
    /// NEON as "asimd" on AArch64).
    aliases: &'static [&'static str],
    cfg_flag: &'static str,
    detected: bool,
}

impl CpuFeature {
    // Groups all CPU features that have a kernel tier in this crate.
    //
    // Every detected feature gets its own cfg flag rather than forcing a
    // single `-C target-feature` for the best tier: the kernels carry
    // `#[target_feature]` themselves, so all tiers the host supports are
    // compiled side by side and the runtime dispatcher picks among them.
    fn features() -> Vec<CpuFeature> {
        vec![
            CpuFeature {
                name: "sse4_1",
                aliases: &[],
                cfg_flag: "sse",
                detected: false,
            },
            CpuFeature {
                name: "avx2",
                aliases: &[],
                cfg_flag: "avx2",
                detected: false,
            },
            CpuFeature {
                name: "fma",
                aliases: &[],
                cfg_flag: "fma",
                detected: false,
            },
            CpuFeature {
                name: "neon",
                aliases: &["asimd"],
                cfg_flag: "neon",
                detected: false,
            },
        ]
    }

    fn matches(&self, contents: &str) -> bool {
        contents.contains(self.name) || self.aliases.iter().any(|a| contents.contains(a))
    }
}

// Feature detection trait to make implementations more modular
trait CpuFeatureDetector {
    fn detect_features(&self, features: &mut [CpuFeature]);
    fn is_applicable(&self) -> bool;
}

// Linux CPU feature detector
struct LinuxDetector;
impl CpuFeatureDetector for LinuxDetector {
    fn detect_features(&self, features: &mut [CpuFeature]) {
        if let Ok(cpuinfo) = std::fs::read_to_string("/proc/cpuinfo") {
            let contents = cpuinfo.to_lowercase();
            for feature in features.iter_mut() {
                feature.detected = feature.matches(&contents);
            }
        }
    }

    fn is_applicable(&self) -> bool {
        cfg!(target_os = "linux")
    }
}

// macOS CPU feature detector
struct MacOSDetector;
impl CpuFeatureDetector for MacOSDetector {
    fn detect_features(&self, features: &mut [CpuFeature]) {
        let output = Command::new("sysctl").args(["-a"]).output();

        if let Ok(output) = output {
            let contents = String::from_utf8_lossy(&output.stdout).to_lowercase();

            for feature in features.iter_mut() {
                match feature.name {
                    "avx2" => feature.detected = contents.contains("hw.optional.avx2_0: 1"),
                    "fma" => feature.detected = contents.contains("hw.optional.fma: 1"),
                    "sse4_1" => feature.detected = contents.contains("hw.optional.sse4_1: 1"),
                    "neon" => feature.detected = contents.contains("hw.optional.neon: 1"),
                    _ => {}
                }
            }
        }
    }

    fn is_applicable(&self) -> bool {
        cfg!(target_os = "macos")
    }
}

// Factory that creates the appropriate detector for the current OS
struct PlatformDetector;
impl PlatformDetector {
    fn cpu_features_detectors() -> Vec<Box<dyn CpuFeatureDetector>> {
        vec![Box::new(LinuxDetector), Box::new(MacOSDetector)]
    }

    fn detect_cpu_features(features: &mut [CpuFeature]) {
        // Find the applicable detector and use it
        for detector in Self::cpu_features_detectors() {
            if detector.is_applicable() {
                detector.detect_features(features);
                break;
            }
        }
    }

    fn apply(features: &[CpuFeature]) {
        // Emit a cfg flag for every detected feature. If nothing is
        // detected the crate builds with the scalar kernel only.
        for feature in features.iter().filter(|f| f.detected) {
            println!("applying: {}", feature.cfg_flag);
            println!("cargo:rustc-cfg={}", feature.cfg_flag);
        }

        println!("cargo::rustc-check-cfg=cfg(avx2)");
        println!("cargo::rustc-check-cfg=cfg(sse)");
        println!("cargo::rustc-check-cfg=cfg(fma)");
        println!("cargo::rustc-check-cfg=cfg(neon)");
    }
}

fn main() {
    let mut features = CpuFeature::features();

    // Determine if we're cross-compiling
    let host = env::var("HOST").unwrap_or_default();
    let target = env::var("TARGET").unwrap_or_default();

    let is_native_build = host == target;

    // Only run CPU detection for native builds; cross builds fall back to
    // the scalar kernel.
    if is_native_build {
        PlatformDetector::detect_cpu_features(&mut features);
    }

    PlatformDetector::apply(&features);
}
