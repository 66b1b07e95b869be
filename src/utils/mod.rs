pub mod mask_ip;
