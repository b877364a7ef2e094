//! Template sources compiled into the crate, keyed by their path under
//! `assets/`.

pub(crate) static EMBEDDED_TEMPLATES: &[(&str, &str)] = &[
    ("espresso/average.j2.in", include_str!("../assets/espresso/average.j2.in")),
    ("espresso/bands.j2.in", include_str!("../assets/espresso/bands.j2.in")),
    ("espresso/dos.j2.in", include_str!("../assets/espresso/dos.j2.in")),
    ("espresso/gw_bands_full_frequency.j2.in", include_str!("../assets/espresso/gw_bands_full_frequency.j2.in")),
    ("espresso/gw_bands_plasmon_pole.j2.in", include_str!("../assets/espresso/gw_bands_plasmon_pole.j2.in")),
    ("espresso/matdyn_grid.j2.in", include_str!("../assets/espresso/matdyn_grid.j2.in")),
    ("espresso/matdyn_path.j2.in", include_str!("../assets/espresso/matdyn_path.j2.in")),
    ("espresso/neb.j2.in", include_str!("../assets/espresso/neb.j2.in")),
    ("espresso/ph_gamma.j2.in", include_str!("../assets/espresso/ph_gamma.j2.in")),
    ("espresso/ph_grid.j2.in", include_str!("../assets/espresso/ph_grid.j2.in")),
    ("espresso/ph_grid_restart.j2.in", include_str!("../assets/espresso/ph_grid_restart.j2.in")),
    ("espresso/ph_init_qpoints.j2.in", include_str!("../assets/espresso/ph_init_qpoints.j2.in")),
    ("espresso/ph_path.j2.in", include_str!("../assets/espresso/ph_path.j2.in")),
    ("espresso/ph_single_irr_qpt.j2.in", include_str!("../assets/espresso/ph_single_irr_qpt.j2.in")),
    ("espresso/pp_density.j2.in", include_str!("../assets/espresso/pp_density.j2.in")),
    ("espresso/pp_electrostatic_potential.j2.in", include_str!("../assets/espresso/pp_electrostatic_potential.j2.in")),
    ("espresso/projwfc.j2.in", include_str!("../assets/espresso/projwfc.j2.in")),
    ("espresso/pw_bands.j2.in", include_str!("../assets/espresso/pw_bands.j2.in")),
    ("espresso/pw_esm.j2.in", include_str!("../assets/espresso/pw_esm.j2.in")),
    ("espresso/pw_esm_relax.j2.in", include_str!("../assets/espresso/pw_esm_relax.j2.in")),
    ("espresso/pw_nscf.j2.in", include_str!("../assets/espresso/pw_nscf.j2.in")),
    ("espresso/pw_relax.j2.in", include_str!("../assets/espresso/pw_relax.j2.in")),
    ("espresso/pw_scf.j2.in", include_str!("../assets/espresso/pw_scf.j2.in")),
    ("espresso/pw_scf_bands_hse.j2.in", include_str!("../assets/espresso/pw_scf_bands_hse.j2.in")),
    ("espresso/pw_scf_kpt_conv.j2.in", include_str!("../assets/espresso/pw_scf_kpt_conv.j2.in")),
    ("espresso/pw_vc_relax.j2.in", include_str!("../assets/espresso/pw_vc_relax.j2.in")),
    ("espresso/q2r.j2.in", include_str!("../assets/espresso/q2r.j2.in")),

    ("jupyterLab/configure.j2.py", include_str!("../assets/jupyterLab/configure.j2.py")),
    ("jupyterLab/configure.j2.sh", include_str!("../assets/jupyterLab/configure.j2.sh")),
    ("jupyterLab/install.j2.sh", include_str!("../assets/jupyterLab/install.j2.sh")),

    ("nwchem/nwchem_total_energy.j2.inp", include_str!("../assets/nwchem/nwchem_total_energy.j2.inp")),

    ("python/espresso_xml_get_qpt_irr.j2.py", include_str!("../assets/python/espresso_xml_get_qpt_irr.j2.py")),
    ("python/hello_world.j2.py", include_str!("../assets/python/hello_world.j2.py")),
    ("python/ml/custom.j2.py", include_str!("../assets/python/ml/custom.j2.py")),
    ("python/ml/data_input_read_csv_pandas.j2.py", include_str!("../assets/python/ml/data_input_read_csv_pandas.j2.py")),
    ("python/ml/model_multilayer_perceptron_sklearn.j2.py", include_str!("../assets/python/ml/model_multilayer_perceptron_sklearn.j2.py")),
    ("python/ml/post_processing_parity_plot_matplotlib.j2.py", include_str!("../assets/python/ml/post_processing_parity_plot_matplotlib.j2.py")),
    ("python/ml/pre_processing_standardization_sklearn.j2.py", include_str!("../assets/python/ml/pre_processing_standardization_sklearn.j2.py")),
    ("python/ml/requirements.j2.txt", include_str!("../assets/python/ml/requirements.j2.txt")),
    ("python/ml/setup_variables_packages.j2.py", include_str!("../assets/python/ml/setup_variables_packages.j2.py")),
    ("python/requirements.j2.txt", include_str!("../assets/python/requirements.j2.txt")),

    ("shell/bash_espresso_collect_dynmat.j2.sh", include_str!("../assets/shell/bash_espresso_collect_dynmat.j2.sh")),
    ("shell/bash_espresso_link_outdir_save.j2.sh", include_str!("../assets/shell/bash_espresso_link_outdir_save.j2.sh")),
    ("shell/bash_hello_world.j2.sh", include_str!("../assets/shell/bash_hello_world.j2.sh")),
    ("shell/bash_job_espresso_pw_scf.j2.sh", include_str!("../assets/shell/bash_job_espresso_pw_scf.j2.sh")),
    ("shell/bash_vasp_prepare_neb_images.j2.sh", include_str!("../assets/shell/bash_vasp_prepare_neb_images.j2.sh")),

    ("vasp/INCAR.j2", include_str!("../assets/vasp/INCAR.j2")),
    ("vasp/INCAR_bands.j2", include_str!("../assets/vasp/INCAR_bands.j2")),
    ("vasp/INCAR_neb.j2", include_str!("../assets/vasp/INCAR_neb.j2")),
    ("vasp/INCAR_neb_initial_final.j2", include_str!("../assets/vasp/INCAR_neb_initial_final.j2")),
    ("vasp/INCAR_relax.j2", include_str!("../assets/vasp/INCAR_relax.j2")),
    ("vasp/INCAR_vc_relax.j2", include_str!("../assets/vasp/INCAR_vc_relax.j2")),
    ("vasp/INCAR_zpe.j2", include_str!("../assets/vasp/INCAR_zpe.j2")),
    ("vasp/KPOINTS.j2", include_str!("../assets/vasp/KPOINTS.j2")),
    ("vasp/KPOINTS_bands.j2", include_str!("../assets/vasp/KPOINTS_bands.j2")),
    ("vasp/KPOINTS_conv.j2", include_str!("../assets/vasp/KPOINTS_conv.j2")),
    ("vasp/POSCAR.j2", include_str!("../assets/vasp/POSCAR.j2")),
    ("vasp/POSCAR_NEB_final.j2", include_str!("../assets/vasp/POSCAR_NEB_final.j2")),
    ("vasp/POSCAR_NEB_initial.j2", include_str!("../assets/vasp/POSCAR_NEB_initial.j2")),
    ("vasp/_MIXIN_INCAR_hse.j2", include_str!("../assets/vasp/_MIXIN_INCAR_hse.j2")),
];
