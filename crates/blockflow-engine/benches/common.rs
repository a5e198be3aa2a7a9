// Benchmark helpers shared by the bench files in this directory; each bench
// uses only some of them.
#[allow(dead_code)]
pub fn generate_c_source(functions: usize) -> String {
    let mut src = String::from("/* generated\n * benchmark input\n */\n#include <stdio.h>\n\n");
    for f in 0..functions {
        src.push_str(&format!("int helper_{f}(int x);\n"));
    }
    for f in 0..functions {
        src.push_str(&format!(
            "int helper_{f}(int x) {{\n    int acc = 0;\n    for (int i = 0; i < x; i++) {{\n        if (i % 3 == 0)\n            acc += i; acc--;\n        else {{\n            // skip\n            continue;\n        }}\n    }}\n    switch (acc) {{\n    case 0: return 0;\n    default:\n        return acc;\n    }}\n}}\n\n"
        ));
    }
    src
}

#[allow(dead_code)]
pub fn generate_python_source(classes: usize) -> String {
    let mut src = String::from("import os\n\n");
    for c in 0..classes {
        src.push_str(&format!(
            "class Item{c}:\n    \"\"\"Item number {c}.\"\"\"\n\n    def run(self, values):\n        total = 0\n        for v in values:\n            # accumulate\n            if v > 0:\n                total += v\n            else:\n                total -= call(v,\n                              {c})\n        return total\n\n"
        ));
    }
    src
}
