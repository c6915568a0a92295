//! Optional integrations, each enabled by its own toggle

file_generator!(
    /// Rails engine and install generator
    Rails,
    "rails",
    [
        "%gem_name%/lib/%gem_name%/engine.rb.tt",
        "%gem_name%/lib/generators/%gem_name%/install/install_generator.rb.tt",
        "%gem_name%/lib/generators/%gem_name%/install/USAGE.tt",
    ]
);

file_generator!(
    Rspec,
    "rspec",
    [
        "%gem_name%/.rspec.tt",
        "%gem_name%/spec/spec_helper.rb.tt",
        "%gem_name%/spec/lib/%gem_name%/%gem_name%_spec.rb.tt",
    ]
);

file_generator!(Guard, "guard", ["%gem_name%/Guardfile.tt"]);

file_generator!(Travis, "travis", ["%gem_name%/.travis.yml.tt"]);

file_generator!(CodeClimate, "code_climate", ["%gem_name%/.codeclimate.yml.tt"]);
